use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One recorded work session as read by the reporting side.
///
/// Rows come from a store where almost every column is nullable, so the
/// optional fields stay optional here and each aggregation decides its own
/// fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    pub work_log_id: String,
    pub user_id: String,
    /// Calendar day the session belongs to. Bucketing uses this, never the times.
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// When true, earnings use the profile's default wage instead of `custom_rate`.
    pub default_rate: bool,
    pub custom_rate: Option<f64>,
    pub notes: Option<String>,
}
