//! Integration test: events published on the bus land in the `events`
//! table via the persistence service.

use reelmark_db::repositories::EventRepo;
use reelmark_events::bus::{EventBus, PlatformEvent, EVENT_VIDEO_STATE_CHANGED};
use reelmark_events::EventPersistence;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_events_are_persisted(pool: PgPool) {
    let bus = EventBus::default();
    let receiver = bus.subscribe();
    let handle = tokio::spawn(EventPersistence::run(pool.clone(), receiver));

    bus.publish(
        PlatformEvent::new(EVENT_VIDEO_STATE_CHANGED)
            .with_source("video", 42)
            .with_payload(serde_json::json!({"from": "draft", "to": "editing"})),
    );

    // Dropping the bus closes the channel; the service drains the buffered
    // event and exits.
    drop(bus);
    handle.await.unwrap();

    let events = EventRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EVENT_VIDEO_STATE_CHANGED);
    assert_eq!(events[0].source_entity_type.as_deref(), Some("video"));
    assert_eq!(events[0].source_entity_id, Some(42));
    assert_eq!(events[0].payload["to"], "editing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn persist_writes_row_directly(pool: PgPool) {
    let event = PlatformEvent::new("hotspot.created").with_source("hotspot", 7);
    let id = EventPersistence::persist(&pool, &event).await.unwrap();
    assert!(id > 0);
}
