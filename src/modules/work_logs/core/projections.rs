use crate::modules::work_logs::core::events::WorkLogEvent;
use crate::modules::work_logs::use_cases::list_work_logs::projection::WorkLogRow;

pub enum Mutation {
    Upsert(WorkLogRow),
}

pub fn apply(stream_id: &str, version: i64, event: &WorkLogEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        WorkLogEvent::WorkSessionLoggedV1(details) => vec![Mutation::Upsert(WorkLogRow {
            work_log_id: details.work_log_id.clone(),
            user_id: details.user_id.clone(),
            date: details.date,
            start_time: details.start_time,
            end_time: details.end_time,
            default_rate: details.default_rate,
            custom_rate: details.custom_rate,
            notes: details.notes.clone(),
            created_at: details.created_at,
            created_by: details.created_by.clone(),
            last_event_id: Some(stream_key),
        })],
    }
}
