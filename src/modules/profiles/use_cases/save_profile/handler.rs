use crate::modules::profiles::core::events::ProfileEvent;
use crate::modules::profiles::core::evolve::evolve;
use crate::modules::profiles::core::state::ProfileState;
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::modules::profiles::use_cases::save_profile::decide::decide_save;
use crate::modules::profiles::use_cases::save_profile::decision::Decision;
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

pub fn profile_stream_id(user_id: &str) -> String {
    format!("Profile-{user_id}")
}

pub struct SaveProfileHandler<TEventStore>
where
    TEventStore: EventStore<ProfileEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> SaveProfileHandler<TEventStore>
where
    TEventStore: EventStore<ProfileEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Returns the stream the profile was written to.
    pub async fn handle(&self, command: SaveProfile) -> Result<String, ApplicationError> {
        let stream_id = profile_stream_id(&command.user_id);
        let stream = self.event_store.load(&stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ProfileState::None, evolve);

        match decide_save(&state, command) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(&stream_id, stream.version, &events)
                    .await?;
                tracing::info!(%stream_id, "profile saved");
                Ok(stream_id)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
