//! Repository for the `video_ctas` table.

use reelmark_core::types::DbId;
use sqlx::PgPool;

use crate::models::video_cta::{UpsertVideoCta, VideoCta};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, label, url, mode, created_at, updated_at";

/// Provides operations for video CTAs (at most one per video).
pub struct VideoCtaRepo;

impl VideoCtaRepo {
    /// Create or replace the CTA for a video, returning the row.
    ///
    /// Relies on `uq_video_ctas_video_id` for the one-per-video rule.
    pub async fn upsert(
        pool: &PgPool,
        video_id: DbId,
        input: &UpsertVideoCta,
    ) -> Result<VideoCta, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_ctas (video_id, label, url, mode)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_video_ctas_video_id DO UPDATE SET
                label = EXCLUDED.label,
                url = EXCLUDED.url,
                mode = EXCLUDED.mode,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoCta>(&query)
            .bind(video_id)
            .bind(&input.label)
            .bind(&input.url)
            .bind(&input.mode)
            .fetch_one(pool)
            .await
    }

    /// Find the CTA for a video, if one is configured.
    pub async fn find_by_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Option<VideoCta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_ctas WHERE video_id = $1");
        sqlx::query_as::<_, VideoCta>(&query)
            .bind(video_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove the CTA for a video. Returns `true` if a row was deleted.
    pub async fn delete_by_video(pool: &PgPool, video_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video_ctas WHERE video_id = $1")
            .bind(video_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
