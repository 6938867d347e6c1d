use crate::modules::profiles::use_cases::get_profile::projection::ProfileRow;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileProjectionRepository: Send + Sync {
    async fn upsert(&self, row: ProfileRow) -> anyhow::Result<()>;
}
