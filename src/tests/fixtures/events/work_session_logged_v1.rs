use crate::modules::work_logs::core::events::v1::work_session_logged::WorkSessionLoggedV1;
use crate::tests::fixtures::commands::log_work_session::LogWorkSessionBuilder;

/// Canonical event instance for tests.
pub fn make_work_session_logged_v1_event() -> WorkSessionLoggedV1 {
    let command = LogWorkSessionBuilder::new().build();
    WorkSessionLoggedV1 {
        work_log_id: command.work_log_id,
        user_id: command.user_id,
        date: command.date,
        start_time: command.start_time,
        end_time: command.end_time,
        default_rate: command.default_rate,
        custom_rate: command.custom_rate,
        notes: command.notes,
        created_at: command.created_at,
        created_by: command.created_by,
    }
}
