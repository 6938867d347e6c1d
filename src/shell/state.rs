use crate::modules::profiles::adapters::outbound::projections_in_memory::InMemoryProfileProjections;
use crate::modules::profiles::core::events::ProfileEvent;
use crate::modules::profiles::use_cases::get_profile::handler::Projector as ProfileProjector;
use crate::modules::profiles::use_cases::get_profile::queries_port::ProfileQueries;
use crate::modules::profiles::use_cases::save_profile::handler::SaveProfileHandler;
use crate::modules::reporting::use_cases::get_dashboard::handler::GetDashboardHandler;
use crate::modules::work_logs::adapters::outbound::projections_in_memory::InMemoryWorkLogProjections;
use crate::modules::work_logs::core::events::WorkLogEvent;
use crate::modules::work_logs::use_cases::list_work_logs::handler::Projector as WorkLogProjector;
use crate::modules::work_logs::use_cases::list_work_logs::queries_port::WorkLogQueries;
use crate::modules::work_logs::use_cases::log_work_session::handler::LogWorkSessionHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub work_log_queries: Arc<dyn WorkLogQueries + Send + Sync>,
    pub work_log_projections: Arc<InMemoryWorkLogProjections>,
    pub log_work_session_handler: Arc<LogWorkSessionHandler<InMemoryEventStore<WorkLogEvent>>>,
    pub work_log_event_store: Arc<InMemoryEventStore<WorkLogEvent>>,
    pub work_log_projector:
        Arc<WorkLogProjector<InMemoryWorkLogProjections, InMemoryWorkLogProjections>>,
    pub profile_queries: Arc<dyn ProfileQueries + Send + Sync>,
    pub profile_projections: Arc<InMemoryProfileProjections>,
    pub save_profile_handler: Arc<SaveProfileHandler<InMemoryEventStore<ProfileEvent>>>,
    pub profile_event_store: Arc<InMemoryEventStore<ProfileEvent>>,
    pub profile_projector:
        Arc<ProfileProjector<InMemoryProfileProjections, InMemoryProfileProjections>>,
    pub dashboard_handler: Arc<GetDashboardHandler>,
}

impl AppState {
    pub fn in_memory(recent_logs_limit: u64) -> Self {
        Self::from_parts(
            InMemoryEventStore::new(),
            InMemoryWorkLogProjections::new(),
            InMemoryEventStore::new(),
            InMemoryProfileProjections::new(),
            recent_logs_limit,
        )
    }

    /// Wires already configured stores, e.g. ones toggled offline in tests.
    pub fn from_parts(
        work_log_event_store: InMemoryEventStore<WorkLogEvent>,
        work_log_projections: InMemoryWorkLogProjections,
        profile_event_store: InMemoryEventStore<ProfileEvent>,
        profile_projections: InMemoryProfileProjections,
        recent_logs_limit: u64,
    ) -> Self {
        let work_log_event_store = Arc::new(work_log_event_store);
        let work_log_projections = Arc::new(work_log_projections);
        let profile_event_store = Arc::new(profile_event_store);
        let profile_projections = Arc::new(profile_projections);

        let work_log_projector = Arc::new(WorkLogProjector::new(
            "work_log_summary",
            work_log_projections.clone(),
            work_log_projections.clone(),
        ));
        let profile_projector = Arc::new(ProfileProjector::new(
            "profile_summary",
            profile_projections.clone(),
            profile_projections.clone(),
        ));

        let dashboard_handler = Arc::new(GetDashboardHandler::new(
            work_log_projections.clone(),
            profile_projections.clone(),
            recent_logs_limit,
        ));

        Self {
            work_log_queries: work_log_projections.clone(),
            work_log_projections,
            log_work_session_handler: Arc::new(LogWorkSessionHandler::new(
                work_log_event_store.clone(),
            )),
            work_log_event_store,
            work_log_projector,
            profile_queries: profile_projections.clone(),
            profile_projections,
            save_profile_handler: Arc::new(SaveProfileHandler::new(profile_event_store.clone())),
            profile_event_store,
            profile_projector,
            dashboard_handler,
        }
    }
}
