use crate::modules::work_logs::core::events::WorkLogEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("work session already logged")]
    AlreadyExists,

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("custom rate must not be negative")]
    NegativeRate,
}

pub enum Decision {
    Accepted { events: Vec<WorkLogEvent> },
    Rejected { reason: DecideError },
}
