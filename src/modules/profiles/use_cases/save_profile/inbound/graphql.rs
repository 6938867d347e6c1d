use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::profiles::core::profile::{Currency, TimeFormat};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::modules::profiles::use_cases::save_profile::inbound::http::project_stream;
use crate::shell::state::AppState;

fn parse_time_format(value: Option<String>) -> GqlResult<TimeFormat> {
    match value {
        None => Ok(TimeFormat::default()),
        Some(code) => TimeFormat::from_code(&code)
            .ok_or_else(|| async_graphql::Error::new(format!("invalid time format: {code}"))),
    }
}

#[derive(Default)]
pub struct SaveProfileMutation;

#[Object]
impl SaveProfileMutation {
    async fn save_profile(
        &self,
        context: &Context<'_>,
        user_id: String,
        default_wage: Option<f64>,
        currency: Option<String>,
        time_format: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = SaveProfile {
            user_id,
            default_wage,
            currency: currency.map(Currency::from).unwrap_or_default(),
            time_format: parse_time_format(time_format)?,
            saved_at: Utc::now().timestamp_millis(),
        };

        let stream_id = state
            .save_profile_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        project_stream(state, &stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(true)
    }
}
