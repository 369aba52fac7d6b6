//! Repository for the `videos` table, plus the PostgreSQL-backed
//! implementation of the lifecycle state-store seam.

use async_trait::async_trait;
use reelmark_core::lifecycle::{StoreError, VideoState, VideoStateStore};
use reelmark_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, UpdateVideo, Video};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, duration_secs, slug, slug_finalized, state, created_at, updated_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video in the `draft` state, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, duration_secs, state)
             VALUES ($1, $2, 'draft')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(input.duration_secs)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Update a video. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                duration_secs = COALESCE($3, duration_secs),
                slug = COALESCE($4, slug),
                slug_finalized = COALESCE($5, slug_finalized),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.duration_secs)
            .bind(&input.slug)
            .bind(input.slug_finalized)
            .fetch_optional(pool)
            .await
    }

    /// Persist a lifecycle state tag. Returns `true` if a row was updated.
    pub async fn set_state(pool: &PgPool, id: DbId, state: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE videos SET state = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(state)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a video. Hotspots and the CTA cascade. Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// [`VideoStateStore`] backed by the `videos` table.
///
/// The lifecycle transition in `reelmark-core` writes through this seam;
/// it maps a missing row to a store rejection rather than a silent no-op.
pub struct PgVideoStateStore {
    pool: DbPool,
}

impl PgVideoStateStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStateStore for PgVideoStateStore {
    async fn persist_state(&self, video_id: DbId, next: VideoState) -> Result<(), StoreError> {
        let updated = VideoRepo::set_state(&self.pool, video_id, next.as_str())
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        if updated {
            Ok(())
        } else {
            Err(StoreError(format!("video {video_id} does not exist")))
        }
    }
}
