use crate::modules::work_logs::use_cases::list_work_logs::projection::WorkLogRow;
use chrono::{NaiveDate, NaiveTime};

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

/// A default-rate row for `user-fixed-0001`.
pub fn make_work_log_row(
    work_log_id: &str,
    date: &str,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> WorkLogRow {
    WorkLogRow {
        work_log_id: work_log_id.to_string(),
        user_id: "user-fixed-0001".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        start_time: start_time.map(time),
        end_time: end_time.map(time),
        default_rate: true,
        custom_rate: None,
        notes: None,
        created_at: 1_700_000_000_000,
        created_by: "user-fixed-0001".to_string(),
        last_event_id: None,
    }
}
