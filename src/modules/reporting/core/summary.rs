use crate::modules::profiles::core::profile::{Currency, TimeFormat, UserProfile};
use crate::modules::reporting::core::comparison::delta;
use crate::modules::reporting::core::earnings::{log_earnings, total_earnings};
use crate::modules::reporting::core::hours::{
    average_daily_hours, days_worked, log_hours, total_hours,
};
use crate::modules::reporting::core::weekday_buckets::{
    WeekdayHours, bucket_by_weekday, chart_ceiling,
};
use crate::modules::work_logs::core::work_log::WorkLog;
use serde::{Deserialize, Serialize};

/// A recent log annotated for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentLogView {
    #[serde(flatten)]
    pub log: WorkLog,
    pub hours: f64,
    pub earnings: f64,
    /// Start and end rendered in the user's preferred time format.
    pub start_display: Option<String>,
    pub end_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub week_hours: f64,
    pub week_hours_delta: f64,
    pub month_earnings: f64,
    pub month_earnings_delta: f64,
    pub days_worked_this_month: usize,
    pub average_daily_hours: f64,
    pub average_daily_hours_delta: f64,
    pub weekly_hours: Vec<WeekdayHours>,
    /// Largest weekday bucket, never below 8. Only for scaling the chart.
    pub weekly_chart_ceiling: f64,
    pub recent_logs: Vec<RecentLogView>,
    pub currency: Option<Currency>,
    pub currency_symbol: Option<String>,
    pub time_format: Option<TimeFormat>,
}

/// Composes the aggregations into one dashboard. Pure: no I/O and no error
/// states; missing data degrades to zeros.
pub fn build_dashboard_summary(
    profile: Option<&UserProfile>,
    current_week: &[WorkLog],
    last_week: &[WorkLog],
    current_month: &[WorkLog],
    last_month: &[WorkLog],
    recent: &[WorkLog],
) -> DashboardSummary {
    let default_wage = profile.and_then(|p| p.default_wage);
    let time_format = profile.map(|p| p.time_format).unwrap_or_default();

    let week_hours = total_hours(current_week);
    let month_earnings = total_earnings(current_month, default_wage);
    let average = average_daily_hours(current_month);
    let weekly_hours = bucket_by_weekday(current_week);
    let weekly_chart_ceiling = chart_ceiling(&weekly_hours);

    let recent_logs = recent
        .iter()
        .map(|log| RecentLogView {
            hours: log_hours(log),
            earnings: log_earnings(log, default_wage),
            start_display: log.start_time.map(|t| time_format.format(t)),
            end_display: log.end_time.map(|t| time_format.format(t)),
            log: log.clone(),
        })
        .collect();

    DashboardSummary {
        week_hours,
        week_hours_delta: delta(week_hours, total_hours(last_week)),
        month_earnings,
        month_earnings_delta: delta(month_earnings, total_earnings(last_month, default_wage)),
        days_worked_this_month: days_worked(current_month),
        average_daily_hours: average,
        average_daily_hours_delta: delta(average, average_daily_hours(last_month)),
        weekly_hours,
        weekly_chart_ceiling,
        recent_logs,
        currency: profile.map(|p| p.currency),
        currency_symbol: profile.map(|p| p.currency.symbol().to_string()),
        time_format: profile.map(|p| p.time_format),
    }
}
