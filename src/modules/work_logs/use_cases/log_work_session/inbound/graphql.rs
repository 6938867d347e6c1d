use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::modules::work_logs::use_cases::log_work_session::command::LogWorkSession;
use crate::modules::work_logs::use_cases::log_work_session::inbound::http::{
    project_stream, work_log_stream_id,
};
use crate::shell::state::AppState;

fn parse_time(value: Option<String>) -> GqlResult<Option<NaiveTime>> {
    value
        .map(|v| {
            NaiveTime::parse_from_str(&v, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(&v, "%H:%M"))
        })
        .transpose()
        .map_err(|e| async_graphql::Error::new(format!("invalid time: {e}")))
}

#[derive(Default)]
pub struct LogWorkSessionMutation;

#[Object]
impl LogWorkSessionMutation {
    #[allow(clippy::too_many_arguments)]
    async fn log_work_session(
        &self,
        context: &Context<'_>,
        user_id: String,
        date: String,
        start_time: Option<String>,
        end_time: Option<String>,
        default_rate: bool,
        custom_rate: Option<f64>,
        notes: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| async_graphql::Error::new(format!("invalid date: {e}")))?;
        let work_log_id = Uuid::now_v7().to_string();
        let stream_id = work_log_stream_id(&work_log_id);

        let command = LogWorkSession {
            work_log_id: work_log_id.clone(),
            created_by: user_id.clone(),
            user_id,
            date,
            start_time: parse_time(start_time)?,
            end_time: parse_time(end_time)?,
            default_rate,
            custom_rate,
            notes,
            created_at: Utc::now().timestamp_millis(),
        };

        state
            .log_work_session_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        project_stream(state, &stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(work_log_id))
    }
}
