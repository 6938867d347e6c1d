use crate::modules::work_logs::adapters::outbound::projections_in_memory::InMemoryWorkLogProjections;
use crate::modules::work_logs::core::events::WorkLogEvent;
use crate::modules::work_logs::use_cases::list_work_logs::handler::Projector;
use crate::modules::work_logs::use_cases::list_work_logs::queries_port::WorkLogQueries;
use crate::modules::work_logs::use_cases::log_work_session::handler::LogWorkSessionHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::tests::fixtures::commands::log_work_session::LogWorkSessionBuilder;
use chrono::NaiveDate;
use std::sync::Arc;

#[tokio::test]
async fn lists_work_logs_by_user() {
    let store = Arc::new(InMemoryEventStore::<WorkLogEvent>::new());
    let projections = Arc::new(InMemoryWorkLogProjections::new());
    let projector = Projector::new("work_log_summary", projections.clone(), projections.clone());
    let handler = LogWorkSessionHandler::new(store.clone());

    let commands: Vec<_> = [12, 14, 13]
        .into_iter()
        .map(|day| {
            LogWorkSessionBuilder::new()
                .work_log_id(format!("wl-{day}"))
                .date(NaiveDate::from_ymd_opt(2026, 10, day).unwrap())
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let stream_id = format!("WorkLog-{}", command.work_log_id);
        handler.handle(&stream_id, command).await.unwrap();

        let loaded = store.load(&stream_id).await.unwrap();
        projector
            .apply_one(&stream_id, loaded.version, loaded.events.first().unwrap())
            .await
            .unwrap();
    }

    let list = projections
        .list_by_user_id("user-fixed-0001", 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].date >= list[1].date);
    assert_eq!(list[0].work_log_id, commands[1].work_log_id);
    assert_eq!(list[2].work_log_id, commands[0].work_log_id);
}

#[tokio::test]
async fn keeps_users_apart() {
    let store = Arc::new(InMemoryEventStore::<WorkLogEvent>::new());
    let projections = Arc::new(InMemoryWorkLogProjections::new());
    let projector = Projector::new("work_log_summary", projections.clone(), projections.clone());
    let handler = LogWorkSessionHandler::new(store.clone());

    for (id, user) in [("wl-a", "user-a"), ("wl-b", "user-b")] {
        let stream_id = format!("WorkLog-{id}");
        let command = LogWorkSessionBuilder::new()
            .work_log_id(id)
            .user_id(user)
            .build();
        handler.handle(&stream_id, command).await.unwrap();
        let loaded = store.load(&stream_id).await.unwrap();
        projector
            .apply_one(&stream_id, loaded.version, &loaded.events[0])
            .await
            .unwrap();
    }

    let list = projections.list_by_user_id("user-a", 0, 10, true).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].user_id, "user-a");
}
