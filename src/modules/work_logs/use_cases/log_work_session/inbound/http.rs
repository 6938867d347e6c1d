use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::work_logs::use_cases::log_work_session::command::LogWorkSession;
use crate::modules::work_logs::use_cases::log_work_session::handler::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LogWorkSessionBody {
    pub user_id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub default_rate: bool,
    pub custom_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct LogWorkSessionResponse {
    pub work_log_id: String,
}

pub fn work_log_stream_id(work_log_id: &str) -> String {
    format!("WorkLog-{work_log_id}")
}

/// Inline projection so queries see the new row immediately.
pub(crate) async fn project_stream(state: &AppState, stream_id: &str) -> anyhow::Result<()> {
    let loaded = state.work_log_event_store.load(stream_id).await?;
    if let Some(last) = loaded.events.last() {
        state
            .work_log_projector
            .apply_one(stream_id, loaded.version, last)
            .await?;
    }
    Ok(())
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LogWorkSessionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let work_log_id = Uuid::now_v7().to_string();
    let stream_id = work_log_stream_id(&work_log_id);

    let command = LogWorkSession {
        work_log_id: work_log_id.clone(),
        created_by: body.user_id.clone(),
        user_id: body.user_id,
        date: body.date,
        start_time: body.start_time,
        end_time: body.end_time,
        default_rate: body.default_rate,
        custom_rate: body.custom_rate,
        notes: body.notes,
        created_at: Utc::now().timestamp_millis(),
    };

    match state.log_work_session_handler.handle(&stream_id, command).await {
        Ok(()) => {}
        Err(ApplicationError::Domain(_)) => return StatusCode::CONFLICT.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }

    if let Err(error) = project_stream(&state, &stream_id).await {
        tracing::error!(%stream_id, %error, "work log projection failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::CREATED,
        Json(LogWorkSessionResponse { work_log_id }),
    )
        .into_response()
}
