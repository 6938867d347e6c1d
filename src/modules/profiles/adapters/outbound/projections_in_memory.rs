// In memory profile read model and watermark repository.

use crate::modules::profiles::adapters::outbound::projections::ProfileProjectionRepository;
use crate::modules::profiles::core::profile::UserProfile;
use crate::modules::profiles::use_cases::get_profile::projection::ProfileRow;
use crate::modules::profiles::use_cases::get_profile::queries_port::ProfileQueries;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProfileProjections {
    rows: RwLock<HashMap<String, ProfileRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProfileProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ProfileProjectionRepository for InMemoryProfileProjections {
    async fn upsert(&self, row: ProfileRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Profile projections offline"));
        }

        self.rows.write().await.insert(row.user_id.clone(), row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProfileProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileQueries for InMemoryProfileProjections {
    async fn find_by_user_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Profile projections offline"));
        }

        Ok(self
            .rows
            .read()
            .await
            .get(user_id)
            .cloned()
            .map(UserProfile::from))
    }
}
