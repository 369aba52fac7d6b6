//! Handlers for the `/videos` resource: CRUD, lifecycle transitions, and
//! the scene-state projection endpoint.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelmark_core::error::CoreError;
use reelmark_core::lifecycle::{self, VideoState};
use reelmark_core::scene::{compute_scene_state, SceneState};
use reelmark_core::types::DbId;
use reelmark_core::video as video_rules;
use reelmark_db::models::video::{CreateVideo, UpdateVideo, Video};
use reelmark_db::repositories::{HotspotRepo, PgVideoStateStore, VideoRepo};
use reelmark_events::bus::{
    PlatformEvent, EVENT_SCENE_STATE_OBSERVED, EVENT_VIDEO_STATE_CHANGED,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Video row enriched with the reconciled lifecycle state.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    #[serde(flatten)]
    pub video: Video,
    /// Authoritative state: the persisted tag when valid, otherwise
    /// derived from the row's data (see `reelmark_core::lifecycle`).
    pub effective_state: VideoState,
    pub hotspot_count: i64,
}

/// Scene snapshot serialized for UI consumers. Collections are id lists;
/// full hotspot rows come from the hotspot listing endpoint.
#[derive(Debug, Serialize)]
pub struct SceneStateResponse {
    pub state: SceneState,
    pub current_time: f64,
    pub total_hotspots: usize,
    pub complete_count: usize,
    pub all_complete: bool,
    pub next_hotspot_id: Option<DbId>,
    pub next_hotspot_time: Option<f64>,
    pub active_ids: Vec<DbId>,
    pub future_ids: Vec<DbId>,
    pub incomplete_ids: Vec<DbId>,
    pub complete_ids: Vec<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct SceneStateQuery {
    /// Playback time in seconds.
    pub time: f64,
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub next_state: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_video(state: &AppState, id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))
}

async fn to_response(state: &AppState, video: Video) -> AppResult<VideoResponse> {
    let hotspot_count = HotspotRepo::count_by_video(&state.pool, video.id).await?;
    let effective_state = video.effective_state(hotspot_count > 0);
    Ok(VideoResponse {
        video,
        effective_state,
        hotspot_count,
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<VideoResponse>)> {
    video_rules::validate_title(&input.title)?;
    video_rules::validate_duration(input.duration_secs)?;

    let video = VideoRepo::create(&state.pool, &input).await?;
    let response = to_response(&state, video).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VideoResponse>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    let mut responses = Vec::with_capacity(videos.len());
    for video in videos {
        responses.push(to_response(&state, video).await?);
    }
    Ok(Json(responses))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VideoResponse>> {
    let video = load_video(&state, id).await?;
    Ok(Json(to_response(&state, video).await?))
}

/// PUT /api/v1/videos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<Json<VideoResponse>> {
    if let Some(title) = &input.title {
        video_rules::validate_title(title)?;
    }
    if let Some(duration) = input.duration_secs {
        video_rules::validate_duration(duration)?;
    }
    if let Some(slug) = &input.slug {
        video_rules::validate_slug(slug)?;
    }

    // Finalizing requires a slug to finalize: either one being set in this
    // request or one already on the row.
    if input.slug_finalized == Some(true) && input.slug.is_none() {
        let existing = load_video(&state, id).await?;
        if existing.slug.is_none() {
            return Err(AppError::Core(CoreError::Validation(
                "Cannot finalize a slug before one is set".to_string(),
            )));
        }
    }

    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(Json(to_response(&state, video).await?))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Video", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/videos/{id}/transition
///
/// Moves the video to `next_state`. The transition is validated against
/// the lifecycle table before any write; an illegal pair returns 409
/// without touching the store.
pub async fn transition(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(req): Json<TransitionRequest>,
) -> AppResult<Json<VideoResponse>> {
    let next = VideoState::parse(&req.next_state).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown video state '{}'", req.next_state))
    })?;

    let video = load_video(&state, id).await?;
    let hotspot_count = HotspotRepo::count_by_video(&state.pool, id).await?;
    let current = video.effective_state(hotspot_count > 0);

    let store = PgVideoStateStore::new(state.pool.clone());
    lifecycle::transition_to(&store, id, current, next).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_VIDEO_STATE_CHANGED)
            .with_source("video", id)
            .with_payload(serde_json::json!({
                "from": current.as_str(),
                "to": next.as_str(),
            })),
    );

    let updated = load_video(&state, id).await?;
    Ok(Json(to_response(&state, updated).await?))
}

// ---------------------------------------------------------------------------
// Scene state
// ---------------------------------------------------------------------------

/// GET /api/v1/videos/{id}/scene-state?time=T
///
/// Pure projection of the video's hotspots at playback time `T`. Safe to
/// poll on every player tick; the observation telemetry below is deduped
/// so repeated polls of the same state do not flood the event bus.
pub async fn scene_state(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<SceneStateQuery>,
) -> AppResult<Json<SceneStateResponse>> {
    // 404 for unknown videos rather than an empty snapshot.
    load_video(&state, id).await?;

    let rows = HotspotRepo::list_by_video(&state.pool, id).await?;
    let hotspots: Vec<reelmark_core::hotspot::Hotspot> =
        rows.iter().map(|r| r.to_domain()).collect();

    let snapshot = compute_scene_state(&hotspots, query.time);

    let response = SceneStateResponse {
        state: snapshot.state,
        current_time: query.time,
        total_hotspots: snapshot.total_hotspots,
        complete_count: snapshot.complete_count,
        all_complete: snapshot.all_complete,
        next_hotspot_id: snapshot.next_hotspot.map(|h| h.id),
        next_hotspot_time: snapshot.next_hotspot_time,
        active_ids: snapshot.active.iter().map(|h| h.id).collect(),
        future_ids: snapshot.future.iter().map(|h| h.id).collect(),
        incomplete_ids: snapshot.incomplete.iter().map(|h| h.id).collect(),
        complete_ids: snapshot.complete.iter().map(|h| h.id).collect(),
    };

    publish_observation(&state, id, response.state);

    Ok(Json(response))
}

/// Emit a scene-state observation event unless the same (video, state)
/// pair was already reported within the dedup window.
fn publish_observation(state: &AppState, video_id: DbId, scene: SceneState) {
    let key = format!("{video_id}:{}", scene.as_str());
    let fresh = match state.scene_telemetry.lock() {
        Ok(mut window) => window.first_seen(&key, Instant::now()),
        Err(_) => false,
    };
    if fresh {
        state.event_bus.publish(
            PlatformEvent::new(EVENT_SCENE_STATE_OBSERVED)
                .with_source("video", video_id)
                .with_payload(serde_json::json!({ "state": scene.as_str() })),
        );
    }
}
