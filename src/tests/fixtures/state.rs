use crate::modules::profiles::adapters::outbound::projections_in_memory::InMemoryProfileProjections;
use crate::modules::work_logs::adapters::outbound::projections_in_memory::InMemoryWorkLogProjections;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::state::AppState;

pub const TEST_RECENT_LOGS_LIMIT: u64 = 5;

pub fn make_test_state() -> AppState {
    AppState::in_memory(TEST_RECENT_LOGS_LIMIT)
}

pub fn make_offline_event_store_state() -> AppState {
    let mut work_log_event_store = InMemoryEventStore::new();
    work_log_event_store.toggle_offline();
    let mut profile_event_store = InMemoryEventStore::new();
    profile_event_store.toggle_offline();
    AppState::from_parts(
        work_log_event_store,
        InMemoryWorkLogProjections::new(),
        profile_event_store,
        InMemoryProfileProjections::new(),
        TEST_RECENT_LOGS_LIMIT,
    )
}

pub fn make_offline_projections_state() -> AppState {
    let mut work_log_projections = InMemoryWorkLogProjections::new();
    work_log_projections.toggle_offline();
    let mut profile_projections = InMemoryProfileProjections::new();
    profile_projections.toggle_offline();
    AppState::from_parts(
        InMemoryEventStore::new(),
        work_log_projections,
        InMemoryEventStore::new(),
        profile_projections,
        TEST_RECENT_LOGS_LIMIT,
    )
}
