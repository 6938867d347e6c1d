use crate::modules::work_logs::core::events::WorkLogEvent;
use crate::modules::work_logs::core::state::WorkLogState;

pub fn evolve(state: WorkLogState, event: WorkLogEvent) -> WorkLogState {
    match (state, event) {
        (WorkLogState::None, WorkLogEvent::WorkSessionLoggedV1(e)) => WorkLogState::Logged {
            work_log_id: e.work_log_id,
            user_id: e.user_id,
            date: e.date,
            start_time: e.start_time,
            end_time: e.end_time,
            default_rate: e.default_rate,
            custom_rate: e.custom_rate,
            notes: e.notes,
            created_at: e.created_at,
            created_by: e.created_by,
        },
        // Logged sessions are immutable.
        (state, _) => state,
    }
}
