use crate::modules::work_logs::core::work_log::WorkLog;
use crate::shared::core::primitives::DateRange;
use async_trait::async_trait;

#[async_trait]
pub trait WorkLogQueries {
    /// Pages through a user's logs ordered by date, then start time.
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_desc: bool,
    ) -> anyhow::Result<Vec<WorkLog>>;

    /// All of a user's logs whose date falls inside `range`, ascending.
    async fn list_by_user_in_range(
        &self,
        user_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<WorkLog>>;
}
