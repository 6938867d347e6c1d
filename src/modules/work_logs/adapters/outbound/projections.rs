use crate::modules::work_logs::use_cases::list_work_logs::projection::WorkLogRow;
use async_trait::async_trait;

#[async_trait]
pub trait WorkLogProjectionRepository: Send + Sync {
    async fn upsert(&self, row: WorkLogRow) -> anyhow::Result<()>;
}
