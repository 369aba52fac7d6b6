//! Repository for the `hotspots` table.

use reelmark_core::types::DbId;
use sqlx::PgPool;

use crate::models::hotspot::{CreateHotspot, Hotspot, UpdateHotspot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, time_start, time_end, x, y, product_id, \
    style, cta_label, click_behavior, scale, created_at, updated_at";

/// Provides CRUD operations for hotspots.
pub struct HotspotRepo;

impl HotspotRepo {
    /// Insert a new hotspot for a video, returning the created row.
    pub async fn create(
        pool: &PgPool,
        video_id: DbId,
        input: &CreateHotspot,
    ) -> Result<Hotspot, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotspots
                (video_id, time_start, time_end, x, y, product_id, style,
                 cta_label, click_behavior, scale)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotspot>(&query)
            .bind(video_id)
            .bind(input.time_start)
            .bind(input.time_end)
            .bind(input.x)
            .bind(input.y)
            .bind(input.product_id)
            .bind(&input.style)
            .bind(&input.cta_label)
            .bind(&input.click_behavior)
            .bind(input.scale)
            .fetch_one(pool)
            .await
    }

    /// Find a hotspot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hotspot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotspots WHERE id = $1");
        sqlx::query_as::<_, Hotspot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hotspots for a video, ordered by start time then id.
    pub async fn list_by_video(pool: &PgPool, video_id: DbId) -> Result<Vec<Hotspot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hotspots
             WHERE video_id = $1
             ORDER BY time_start ASC, id ASC"
        );
        sqlx::query_as::<_, Hotspot>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Count the hotspots on a video.
    pub async fn count_by_video(pool: &PgPool, video_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotspots WHERE video_id = $1")
            .bind(video_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Update a hotspot. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHotspot,
    ) -> Result<Option<Hotspot>, sqlx::Error> {
        let query = format!(
            "UPDATE hotspots SET
                time_start = COALESCE($2, time_start),
                time_end = COALESCE($3, time_end),
                x = COALESCE($4, x),
                y = COALESCE($5, y),
                product_id = COALESCE($6, product_id),
                style = COALESCE($7, style),
                cta_label = COALESCE($8, cta_label),
                click_behavior = COALESCE($9, click_behavior),
                scale = COALESCE($10, scale),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotspot>(&query)
            .bind(id)
            .bind(input.time_start)
            .bind(input.time_end)
            .bind(input.x)
            .bind(input.y)
            .bind(input.product_id)
            .bind(&input.style)
            .bind(&input.cta_label)
            .bind(&input.click_behavior)
            .bind(input.scale)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotspot. Hotspots are destroyed outright on explicit
    /// delete, there is no trash. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotspots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
