use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::profiles::core::profile::{Currency, TimeFormat};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::modules::profiles::use_cases::save_profile::handler::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveProfileBody {
    pub user_id: String,
    pub default_wage: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Inline projection so reads see the saved profile immediately.
pub(crate) async fn project_stream(state: &AppState, stream_id: &str) -> anyhow::Result<()> {
    let loaded = state.profile_event_store.load(stream_id).await?;
    if let Some(last) = loaded.events.last() {
        state
            .profile_projector
            .apply_one(stream_id, loaded.version, last)
            .await?;
    }
    Ok(())
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SaveProfileBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SaveProfile {
        user_id: body.user_id,
        default_wage: body.default_wage,
        currency: body.currency,
        time_format: body.time_format,
        saved_at: Utc::now().timestamp_millis(),
    };

    let stream_id = match state.save_profile_handler.handle(command).await {
        Ok(stream_id) => stream_id,
        Err(ApplicationError::Domain(_)) => return StatusCode::CONFLICT.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    if let Err(error) = project_stream(&state, &stream_id).await {
        tracing::error!(%stream_id, %error, "profile projection failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}
