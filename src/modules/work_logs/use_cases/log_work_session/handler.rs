use crate::modules::work_logs::core::events::WorkLogEvent;
use crate::modules::work_logs::core::evolve::evolve;
use crate::modules::work_logs::core::state::WorkLogState;
use crate::modules::work_logs::use_cases::log_work_session::command::LogWorkSession;
use crate::modules::work_logs::use_cases::log_work_session::decide::decide_log;
use crate::modules::work_logs::use_cases::log_work_session::decision::Decision;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

pub struct LogWorkSessionHandler<TEventStore>
where
    TEventStore: EventStore<WorkLogEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> LogWorkSessionHandler<TEventStore>
where
    TEventStore: EventStore<WorkLogEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: LogWorkSession,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(WorkLogState::None, evolve);

        match decide_log(&state, command) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                tracing::info!(stream_id, "work session logged");
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::info!(stream_id, %reason, "work session rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
