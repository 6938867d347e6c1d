use crate::modules::work_logs::core::{
    events::{WorkLogEvent, v1::work_session_logged::WorkSessionLoggedV1},
    state::WorkLogState,
};
use crate::modules::work_logs::use_cases::log_work_session::{
    command::LogWorkSession,
    decision::{DecideError, Decision},
};

/// Incomplete sessions (a missing start or end) are accepted; they simply
/// count as zero hours when reported.
pub fn decide_log(state: &WorkLogState, command: LogWorkSession) -> Decision {
    match state {
        WorkLogState::None => {
            if let (Some(start), Some(end)) = (command.start_time, command.end_time) {
                if end <= start {
                    return Decision::Rejected {
                        reason: DecideError::InvalidInterval,
                    };
                }
            }
            if command.custom_rate.is_some_and(|rate| rate < 0.0) {
                return Decision::Rejected {
                    reason: DecideError::NegativeRate,
                };
            }
            let payload = WorkSessionLoggedV1 {
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
            };
            Decision::Accepted {
                events: vec![WorkLogEvent::WorkSessionLoggedV1(payload)],
            }
        }
        WorkLogState::Logged { .. } => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}
