use crate::modules::profiles::core::events::ProfileEvent;
use crate::modules::profiles::use_cases::get_profile::projection::ProfileRow;

pub enum Mutation {
    Upsert(ProfileRow),
}

pub fn apply(stream_id: &str, version: i64, event: &ProfileEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        ProfileEvent::ProfileSavedV1(details) => vec![Mutation::Upsert(ProfileRow {
            user_id: details.user_id.clone(),
            default_wage: details.default_wage,
            currency: details.currency,
            time_format: details.time_format,
            updated_at: details.saved_at,
            last_event_id: Some(stream_key),
        })],
    }
}
