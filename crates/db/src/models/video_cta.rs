//! Video CTA entity model and DTO.

use reelmark_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `video_ctas` table. At most one per video
/// (`uq_video_ctas_video_id`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoCta {
    pub id: DbId,
    pub video_id: DbId,
    pub label: String,
    pub url: String,
    pub mode: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a video's CTA.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertVideoCta {
    pub label: String,
    pub url: String,
    pub mode: String,
}
