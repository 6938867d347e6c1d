use crate::modules::profiles::use_cases::get_profile::queries_port::ProfileQueries;
use crate::modules::reporting::core::earnings::logs_missing_rate;
use crate::modules::reporting::core::periods::ReportingPeriods;
use crate::modules::reporting::core::summary::{DashboardSummary, build_dashboard_summary};
use crate::modules::reporting::use_cases::get_dashboard::query::GetDashboard;
use crate::modules::work_logs::core::work_log::WorkLog;
use crate::modules::work_logs::use_cases::list_work_logs::queries_port::WorkLogQueries;
use crate::shared::core::primitives::DateRange;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("work log store failed: {0}")]
    WorkLogs(anyhow::Error),

    #[error("profile store failed: {0}")]
    Profile(anyhow::Error),
}

pub struct GetDashboardHandler {
    work_logs: Arc<dyn WorkLogQueries + Send + Sync>,
    profiles: Arc<dyn ProfileQueries + Send + Sync>,
    recent_logs_limit: u64,
}

impl GetDashboardHandler {
    pub fn new(
        work_logs: Arc<dyn WorkLogQueries + Send + Sync>,
        profiles: Arc<dyn ProfileQueries + Send + Sync>,
        recent_logs_limit: u64,
    ) -> Self {
        Self {
            work_logs,
            profiles,
            recent_logs_limit,
        }
    }

    async fn logs_in(
        &self,
        user_id: &str,
        range: DateRange,
    ) -> Result<Vec<WorkLog>, DashboardError> {
        self.work_logs
            .list_by_user_in_range(user_id, range)
            .await
            .map_err(DashboardError::WorkLogs)
    }

    pub async fn handle(&self, query: GetDashboard) -> Result<DashboardSummary, DashboardError> {
        let user_id = query.user_id.as_str();
        let periods = ReportingPeriods::for_day(query.today);

        let (profile, current_week, last_week, current_month, last_month, recent) = tokio::try_join!(
            async {
                self.profiles
                    .find_by_user_id(user_id)
                    .await
                    .map_err(DashboardError::Profile)
            },
            self.logs_in(user_id, periods.current_week),
            self.logs_in(user_id, periods.last_week),
            self.logs_in(user_id, periods.current_month),
            self.logs_in(user_id, periods.last_month),
            async {
                self.work_logs
                    .list_by_user_id(user_id, 0, self.recent_logs_limit, true)
                    .await
                    .map_err(DashboardError::WorkLogs)
            },
        )?;

        let default_wage = profile.as_ref().and_then(|p| p.default_wage);
        let unpriced = logs_missing_rate(current_month.iter().chain(&last_month), default_wage);
        if unpriced > 0 {
            tracing::warn!(
                user_id,
                count = unpriced,
                "work logs without a resolvable rate count as zero earnings"
            );
        }

        Ok(build_dashboard_summary(
            profile.as_ref(),
            &current_week,
            &last_week,
            &current_month,
            &last_month,
            &recent,
        ))
    }
}
