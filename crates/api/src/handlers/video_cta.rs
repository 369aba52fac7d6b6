//! Handlers for a video's CTA, mounted at `/videos/{video_id}/cta`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use reelmark_core::cta as cta_rules;
use reelmark_core::error::CoreError;
use reelmark_core::types::DbId;
use reelmark_db::models::video_cta::{UpsertVideoCta, VideoCta};
use reelmark_db::repositories::{VideoCtaRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

async fn ensure_video_exists(state: &AppState, id: DbId) -> AppResult<()> {
    VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(())
}

/// PUT /api/v1/videos/{video_id}/cta
///
/// Creates the CTA or replaces the existing one — a video carries at
/// most one.
pub async fn upsert(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<UpsertVideoCta>,
) -> AppResult<Json<VideoCta>> {
    ensure_video_exists(&state, video_id).await?;

    cta_rules::validate_label(&input.label)?;
    cta_rules::validate_url(&input.url)?;
    cta_rules::validate_mode(&input.mode)?;

    let cta = VideoCtaRepo::upsert(&state.pool, video_id, &input).await?;
    Ok(Json(cta))
}

/// GET /api/v1/videos/{video_id}/cta
pub async fn get_by_video(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<VideoCta>> {
    ensure_video_exists(&state, video_id).await?;
    let cta = VideoCtaRepo::find_by_video(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "VideoCta",
            id: video_id,
        }))?;
    Ok(Json(cta))
}

/// DELETE /api/v1/videos/{video_id}/cta
pub async fn delete(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_video_exists(&state, video_id).await?;
    let deleted = VideoCtaRepo::delete_by_video(&state.pool, video_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "VideoCta",
            id: video_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
