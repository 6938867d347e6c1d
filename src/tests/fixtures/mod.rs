// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod commands {
    pub mod log_work_session;
    pub mod save_profile;
}

pub mod events {
    pub mod profile_saved_v1;
    pub mod work_session_logged_v1;
}

pub mod rows {
    pub mod work_log_row;
}

pub mod state;
pub mod work_logs;
