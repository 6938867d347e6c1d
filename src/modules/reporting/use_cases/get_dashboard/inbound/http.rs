use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::reporting::use_cases::get_dashboard::query::GetDashboard;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetDashboardParams {
    pub user_id: String,
    pub today: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetDashboardParams>,
) -> impl IntoResponse {
    let query = GetDashboard {
        user_id: params.user_id,
        today: params.today.unwrap_or_else(|| Utc::now().date_naive()),
    };

    match state.dashboard_handler.handle(query).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => {
            tracing::error!(%error, "building dashboard failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
