//! Video entity model and DTOs.

use reelmark_core::lifecycle::{derive_video_state, VideoState};
use reelmark_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub duration_secs: f64,
    pub slug: Option<String>,
    pub slug_finalized: bool,
    /// Persisted lifecycle tag. `None` (or an unknown value) on rows that
    /// predate the state machine; resolve via [`Video::effective_state`].
    pub state: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Video {
    /// The authoritative lifecycle state for this row, reconciling a
    /// missing or stale persisted tag against the actual data.
    pub fn effective_state(&self, has_hotspots: bool) -> VideoState {
        derive_video_state(self.slug_finalized, has_hotspots, self.state.as_deref())
    }
}

/// DTO for creating a video. New videos always start in `draft`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub duration_secs: f64,
}

/// DTO for updating a video. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub duration_secs: Option<f64>,
    pub slug: Option<String>,
    pub slug_finalized: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video(state: Option<&str>, slug_finalized: bool) -> Video {
        Video {
            id: 1,
            title: "Test".to_string(),
            duration_secs: 30.0,
            slug: None,
            slug_finalized,
            state: state.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn effective_state_prefers_valid_tag() {
        assert_eq!(
            video(Some("editing"), true).effective_state(false),
            VideoState::Editing
        );
    }

    #[test]
    fn effective_state_derives_when_tag_missing() {
        assert_eq!(video(None, true).effective_state(false), VideoState::ReadyToPost);
        assert_eq!(video(None, false).effective_state(true), VideoState::Editing);
        assert_eq!(video(None, false).effective_state(false), VideoState::Draft);
    }

    #[test]
    fn effective_state_derives_when_tag_unknown() {
        assert_eq!(
            video(Some("archived"), false).effective_state(true),
            VideoState::Editing
        );
    }
}
