// Shared test fixture for the LogWorkSession command.

use crate::modules::work_logs::use_cases::log_work_session::command::LogWorkSession;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct LogWorkSessionDto {
    pub work_log_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub default_rate: bool,
    pub custom_rate: Option<f64>,
    pub notes: Option<String>,
}

pub struct LogWorkSessionBuilder {
    inner: LogWorkSession,
}

impl Default for LogWorkSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogWorkSessionBuilder {
    pub fn new() -> Self {
        let dto: LogWorkSessionDto =
            serde_json::from_str(include_str!("json/log_work_session.json")).unwrap();

        Self {
            inner: LogWorkSession {
                work_log_id: dto.work_log_id,
                user_id: dto.user_id,
                date: dto.date,
                start_time: dto.start_time,
                end_time: dto.end_time,
                default_rate: dto.default_rate,
                custom_rate: dto.custom_rate,
                notes: dto.notes,
                created_by: "user-fixed-0001".to_string(),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn work_log_id(mut self, v: impl Into<String>) -> Self {
        self.inner.work_log_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn start_time(mut self, v: Option<NaiveTime>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: Option<NaiveTime>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn default_rate(mut self, v: bool) -> Self {
        self.inner.default_rate = v;
        self
    }

    pub fn custom_rate(mut self, v: Option<f64>) -> Self {
        self.inner.custom_rate = v;
        self
    }

    pub fn notes(mut self, v: Option<String>) -> Self {
        self.inner.notes = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> LogWorkSession {
        self.inner
    }
}

#[cfg(test)]
mod log_work_session_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = LogWorkSessionBuilder::default().build();
        assert_eq!(built.work_log_id, "wl-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(built.start_time, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(built.end_time, NaiveTime::from_hms_opt(17, 0, 0));
        assert!(built.default_rate);
        assert_eq!(built.custom_rate, None);
        assert_eq!(built.created_by, "user-fixed-0001");
        assert_eq!(built.created_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_fields() {
        let custom = LogWorkSessionBuilder::new()
            .work_log_id("wl-123")
            .user_id("u-456")
            .date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
            .start_time(None)
            .default_rate(false)
            .custom_rate(Some(12.5))
            .notes(None)
            .created_by("tester")
            .created_at(3333)
            .build();

        assert_eq!(custom.work_log_id, "wl-123");
        assert_eq!(custom.user_id, "u-456");
        assert_eq!(custom.start_time, None);
        assert!(!custom.default_rate);
        assert_eq!(custom.custom_rate, Some(12.5));
        assert_eq!(custom.notes, None);
        assert_eq!(custom.created_by, "tester");
        assert_eq!(custom.created_at, 3333);
    }
}
