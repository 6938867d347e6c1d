use crate::modules::profiles::core::events::ProfileEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("default wage must not be negative")]
    NegativeWage,
}

pub enum Decision {
    Accepted { events: Vec<ProfileEvent> },
    Rejected { reason: DecideError },
}
