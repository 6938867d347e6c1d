use crate::modules::reporting::core::hours::log_hours;
use crate::modules::work_logs::core::work_log::WorkLog;

/// The hourly rate a log bills at: the profile's default wage when the log is
/// flagged `default_rate`, its own `custom_rate` otherwise.
pub fn resolve_rate(log: &WorkLog, default_wage: Option<f64>) -> Option<f64> {
    if log.default_rate {
        default_wage
    } else {
        log.custom_rate
    }
}

/// Earnings of one session. An unresolvable rate contributes zero.
pub fn log_earnings(log: &WorkLog, default_wage: Option<f64>) -> f64 {
    resolve_rate(log, default_wage).map_or(0.0, |rate| log_hours(log) * rate)
}

pub fn total_earnings<'a>(
    logs: impl IntoIterator<Item = &'a WorkLog>,
    default_wage: Option<f64>,
) -> f64 {
    logs.into_iter()
        .map(|log| log_earnings(log, default_wage))
        .sum()
}

/// How many logs have no resolvable rate and therefore earn nothing.
pub fn logs_missing_rate<'a>(
    logs: impl IntoIterator<Item = &'a WorkLog>,
    default_wage: Option<f64>,
) -> usize {
    logs.into_iter()
        .filter(|log| resolve_rate(log, default_wage).is_none())
        .count()
}
