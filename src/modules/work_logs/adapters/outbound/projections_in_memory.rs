// In memory work log read model and watermark repository.
//
// - Stores read model rows in a map keyed by (user_id, work_log_id).
// - Tracks the last processed event per projector.

use crate::modules::work_logs::adapters::outbound::projections::WorkLogProjectionRepository;
use crate::modules::work_logs::core::work_log::WorkLog;
use crate::modules::work_logs::use_cases::list_work_logs::projection::WorkLogRow;
use crate::modules::work_logs::use_cases::list_work_logs::queries_port::WorkLogQueries;
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkLogProjections {
    rows: RwLock<HashMap<(String, String), WorkLogRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryWorkLogProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    async fn rows_for_user(&self, user_id: &str) -> Vec<WorkLogRow> {
        let guard = self.rows.read().await;
        let mut items: Vec<WorkLogRow> = guard
            .iter()
            .filter(|((uid, _), _)| uid == user_id)
            .map(|(_, row)| row.clone())
            .collect();
        // None sorts before any time, so incomplete logs lead their day.
        items.sort_by(|a, b| {
            (a.date, a.start_time, &a.work_log_id).cmp(&(b.date, b.start_time, &b.work_log_id))
        });
        items
    }
}

#[async_trait::async_trait]
impl WorkLogProjectionRepository for InMemoryWorkLogProjections {
    async fn upsert(&self, row: WorkLogRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Work log projections offline"));
        }

        let mut guard = self.rows.write().await;
        guard.insert((row.user_id.clone(), row.work_log_id.clone()), row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryWorkLogProjections {
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
impl WorkLogQueries for InMemoryWorkLogProjections {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_desc: bool,
    ) -> anyhow::Result<Vec<WorkLog>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Work log projections offline"));
        }

        let mut items = self.rows_for_user(user_id).await;
        if sort_desc {
            items.reverse();
        }

        let start = offset as usize;
        if start >= items.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(limit as usize).min(items.len());
        Ok(items[start..end]
            .iter()
            .cloned()
            .map(WorkLog::from)
            .collect())
    }

    async fn list_by_user_in_range(
        &self,
        user_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<WorkLog>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Work log projections offline"));
        }

        Ok(self
            .rows_for_user(user_id)
            .await
            .into_iter()
            .filter(|row| range.contains(row.date))
            .map(WorkLog::from)
            .collect())
    }
}
