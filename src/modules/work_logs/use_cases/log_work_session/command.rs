use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct LogWorkSession {
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
}
