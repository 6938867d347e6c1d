use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_logs::core::work_log::WorkLog;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWorkLog {
    pub work_log_id: String,
    pub user_id: String,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub default_rate: bool,
    pub custom_rate: Option<f64>,
    pub notes: Option<String>,
}

impl From<WorkLog> for GqlWorkLog {
    fn from(log: WorkLog) -> Self {
        Self {
            work_log_id: log.work_log_id,
            user_id: log.user_id,
            date: log.date.to_string(),
            start_time: log.start_time.map(|t| t.to_string()),
            end_time: log.end_time.map(|t| t.to_string()),
            default_rate: log.default_rate,
            custom_rate: log.custom_rate,
            notes: log.notes,
        }
    }
}

#[derive(Default)]
pub struct WorkLogsQuery;

#[Object]
impl WorkLogsQuery {
    async fn work_logs(
        &self,
        context: &Context<'_>,
        user_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlWorkLog>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .work_log_queries
            .list_by_user_id(
                &user_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
                sort_desc.unwrap_or(true),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
