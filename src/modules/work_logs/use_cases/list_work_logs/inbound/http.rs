use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListWorkLogsParams {
    pub user_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListWorkLogsParams>,
) -> impl IntoResponse {
    match state
        .work_log_queries
        .list_by_user_id(
            &params.user_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(logs) => Json(logs).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing work logs failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
