use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::profiles::use_cases::get_profile::inbound::http as get_profile_http;
use crate::modules::profiles::use_cases::save_profile::inbound::http as save_profile_http;
use crate::modules::reporting::use_cases::get_dashboard::inbound::http as dashboard_http;
use crate::modules::work_logs::use_cases::list_work_logs::inbound::http as list_http;
use crate::modules::work_logs::use_cases::log_work_session::inbound::http as log_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/log-work-session", post(log_http::handle))
        .route("/list-work-logs", get(list_http::handle))
        .route(
            "/profile",
            get(get_profile_http::handle).put(save_profile_http::handle),
        )
        .route("/dashboard", get(dashboard_http::handle))
        .with_state(state)
}
