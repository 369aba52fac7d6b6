//! Repository for the `events` table.

use reelmark_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::StoredEvent;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_type, source_entity_type, source_entity_id, payload, occurred_at";

/// Provides insert/query operations for persisted platform events.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event row, returning its id.
    pub async fn insert(
        pool: &PgPool,
        event_type: &str,
        source_entity_type: Option<&str>,
        source_entity_id: Option<DbId>,
        payload: &serde_json::Value,
        occurred_at: Timestamp,
    ) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO events
                (event_type, source_entity_type, source_entity_id, payload, occurred_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(event_type)
        .bind(source_entity_type)
        .bind(source_entity_id)
        .bind(payload)
        .bind(occurred_at)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// List the most recent events, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<StoredEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events ORDER BY occurred_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, StoredEvent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
