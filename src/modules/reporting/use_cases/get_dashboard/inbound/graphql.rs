use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{NaiveDate, Utc};

use crate::modules::reporting::core::summary::{DashboardSummary, RecentLogView};
use crate::modules::reporting::core::weekday_buckets::WeekdayHours;
use crate::modules::reporting::use_cases::get_dashboard::query::GetDashboard;
use crate::modules::work_logs::use_cases::list_work_logs::inbound::graphql::GqlWorkLog;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWeekdayHours {
    pub label: String,
    pub hours: f64,
}

impl From<WeekdayHours> for GqlWeekdayHours {
    fn from(bucket: WeekdayHours) -> Self {
        Self {
            label: bucket.label,
            hours: bucket.hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecentLog {
    pub log: GqlWorkLog,
    pub hours: f64,
    pub earnings: f64,
    pub start_display: Option<String>,
    pub end_display: Option<String>,
}

impl From<RecentLogView> for GqlRecentLog {
    fn from(view: RecentLogView) -> Self {
        Self {
            log: view.log.into(),
            hours: view.hours,
            earnings: view.earnings,
            start_display: view.start_display,
            end_display: view.end_display,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboard {
    pub week_hours: f64,
    pub week_hours_delta: f64,
    pub month_earnings: f64,
    pub month_earnings_delta: f64,
    pub days_worked_this_month: u32,
    pub average_daily_hours: f64,
    pub average_daily_hours_delta: f64,
    pub weekly_hours: Vec<GqlWeekdayHours>,
    pub weekly_chart_ceiling: f64,
    pub recent_logs: Vec<GqlRecentLog>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub time_format: Option<String>,
}

impl From<DashboardSummary> for GqlDashboard {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            week_hours: summary.week_hours,
            week_hours_delta: summary.week_hours_delta,
            month_earnings: summary.month_earnings,
            month_earnings_delta: summary.month_earnings_delta,
            days_worked_this_month: summary.days_worked_this_month as u32,
            average_daily_hours: summary.average_daily_hours,
            average_daily_hours_delta: summary.average_daily_hours_delta,
            weekly_hours: summary.weekly_hours.into_iter().map(Into::into).collect(),
            weekly_chart_ceiling: summary.weekly_chart_ceiling,
            recent_logs: summary.recent_logs.into_iter().map(Into::into).collect(),
            currency: summary.currency.map(|c| c.code().to_string()),
            currency_symbol: summary.currency_symbol,
            time_format: summary.time_format.map(|f| f.code().to_string()),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    /// `today` is YYYY-MM-DD and defaults to the server's UTC date.
    async fn dashboard(
        &self,
        context: &Context<'_>,
        user_id: String,
        today: Option<String>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let today = match today {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
            None => Utc::now().date_naive(),
        };
        let summary = state
            .dashboard_handler
            .handle(GetDashboard { user_id, today })
            .await?;
        Ok(summary.into())
    }
}
