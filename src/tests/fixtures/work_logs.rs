// Read-model WorkLog values for the reporting engine.

use crate::modules::work_logs::core::work_log::WorkLog;
use chrono::{NaiveDate, NaiveTime};

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub struct WorkLogBuilder {
    inner: WorkLog,
}

impl Default for WorkLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkLogBuilder {
    pub fn new() -> Self {
        Self {
            inner: WorkLog {
                work_log_id: "wl-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
                start_time: Some(time("09:00")),
                end_time: Some(time("17:00")),
                default_rate: true,
                custom_rate: None,
                notes: None,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.work_log_id = v.into();
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = NaiveDate::parse_from_str(v, "%Y-%m-%d").unwrap();
        self
    }

    pub fn start(mut self, v: Option<&str>) -> Self {
        self.inner.start_time = v.map(time);
        self
    }

    pub fn end(mut self, v: Option<&str>) -> Self {
        self.inner.end_time = v.map(time);
        self
    }

    pub fn default_rate(mut self) -> Self {
        self.inner.default_rate = true;
        self.inner.custom_rate = None;
        self
    }

    /// Switches the log to its own rate.
    pub fn custom_rate(mut self, v: Option<f64>) -> Self {
        self.inner.default_rate = false;
        self.inner.custom_rate = v;
        self
    }

    pub fn build(self) -> WorkLog {
        self.inner
    }
}

/// A complete default-rate session on `date` from `start` to `end` (HH:MM).
pub fn session(date: &str, start: &str, end: &str) -> WorkLogBuilder {
    WorkLogBuilder::new()
        .date(date)
        .start(Some(start))
        .end(Some(end))
}
