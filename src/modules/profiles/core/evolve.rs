use crate::modules::profiles::core::events::ProfileEvent;
use crate::modules::profiles::core::state::ProfileState;

/// Every save replaces the settings; the revision counts saves.
pub fn evolve(state: ProfileState, event: ProfileEvent) -> ProfileState {
    let revision = match &state {
        ProfileState::None => 0,
        ProfileState::Saved { revision, .. } => *revision,
    };
    match event {
        ProfileEvent::ProfileSavedV1(e) => ProfileState::Saved {
            user_id: e.user_id,
            default_wage: e.default_wage,
            currency: e.currency,
            time_format: e.time_format,
            saved_at: e.saved_at,
            revision: revision + 1,
        },
    }
}
