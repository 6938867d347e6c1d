use crate::modules::work_logs::core::work_log::WorkLog;
use std::collections::HashSet;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Elapsed hours of one session. Zero when either time is missing, and zero
/// when the end precedes the start (sessions never cross midnight).
pub fn log_hours(log: &WorkLog) -> f64 {
    match (log.start_time, log.end_time) {
        (Some(start), Some(end)) if end >= start => {
            (end - start).num_seconds() as f64 / SECONDS_PER_HOUR
        }
        _ => 0.0,
    }
}

pub fn total_hours<'a>(logs: impl IntoIterator<Item = &'a WorkLog>) -> f64 {
    logs.into_iter().map(log_hours).sum()
}

/// Number of distinct calendar dates present among `logs`.
pub fn days_worked(logs: &[WorkLog]) -> usize {
    logs.iter().map(|log| log.date).collect::<HashSet<_>>().len()
}

pub fn average_daily_hours(logs: &[WorkLog]) -> f64 {
    match days_worked(logs) {
        0 => 0.0,
        days => total_hours(logs) / days as f64,
    }
}
