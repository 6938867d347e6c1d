use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub enum WorkLogState {
    None,
    Logged {
        work_log_id: String,
        user_id: String,
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        default_rate: bool,
        custom_rate: Option<f64>,
        notes: Option<String>,
        created_at: i64,
        created_by: String,
    },
}
