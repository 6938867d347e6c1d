use crate::modules::profiles::core::events::v1::profile_saved::ProfileSavedV1;
use crate::tests::fixtures::commands::save_profile::SaveProfileBuilder;

pub fn make_profile_saved_v1_event() -> ProfileSavedV1 {
    let command = SaveProfileBuilder::new().build();
    ProfileSavedV1 {
        user_id: command.user_id,
        default_wage: command.default_wage,
        currency: command.currency,
        time_format: command.time_format,
        saved_at: command.saved_at,
    }
}
