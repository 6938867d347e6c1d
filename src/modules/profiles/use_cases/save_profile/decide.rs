use crate::modules::profiles::core::{
    events::{ProfileEvent, v1::profile_saved::ProfileSavedV1},
    state::ProfileState,
};
use crate::modules::profiles::use_cases::save_profile::{
    command::SaveProfile,
    decision::{DecideError, Decision},
};

pub fn decide_save(_state: &ProfileState, command: SaveProfile) -> Decision {
    if command.default_wage.is_some_and(|wage| wage < 0.0) {
        return Decision::Rejected {
            reason: DecideError::NegativeWage,
        };
    }
    Decision::Accepted {
        events: vec![ProfileEvent::ProfileSavedV1(ProfileSavedV1 {
            user_id: command.user_id,
            default_wage: command.default_wage,
            currency: command.currency,
            time_format: command.time_format,
            saved_at: command.saved_at,
        })],
    }
}
