use crate::modules::work_logs::core::work_log::WorkLog;
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkLogRow {
    pub work_log_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub default_rate: bool,
    pub custom_rate: Option<f64>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub last_event_id: Option<String>,
}

impl From<WorkLogRow> for WorkLog {
    fn from(row: WorkLogRow) -> Self {
        Self {
            work_log_id: row.work_log_id,
            user_id: row.user_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            default_rate: row.default_rate,
            custom_rate: row.custom_rate,
            notes: row.notes,
        }
    }
}
