use crate::modules::reporting::core::hours::total_hours;
use crate::modules::work_logs::core::work_log::WorkLog;
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

/// Smallest value the weekly chart scales to, so a light week still reads as light.
pub const MIN_CHART_CEILING: f64 = 8.0;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayHours {
    pub label: String,
    pub hours: f64,
}

/// Hours per weekday, always seven entries from Monday to Sunday. The weekday
/// comes straight from the stored calendar date.
pub fn bucket_by_weekday(logs: &[WorkLog]) -> Vec<WeekdayHours> {
    WEEK.iter()
        .map(|&day| WeekdayHours {
            label: day.to_string(),
            hours: total_hours(logs.iter().filter(|log| log.date.weekday() == day)),
        })
        .collect()
}

pub fn chart_ceiling(buckets: &[WeekdayHours]) -> f64 {
    buckets
        .iter()
        .map(|bucket| bucket.hours)
        .fold(MIN_CHART_CEILING, f64::max)
}
