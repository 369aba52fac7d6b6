//! Handlers for hotspots, nested under `/videos/{video_id}/hotspots`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use reelmark_core::error::CoreError;
use reelmark_core::hotspot as hotspot_rules;
use reelmark_core::navigation;
use reelmark_core::types::DbId;
use reelmark_db::models::hotspot::{CreateHotspot, Hotspot, UpdateHotspot};
use reelmark_db::models::video::Video;
use reelmark_db::repositories::{HotspotRepo, ProductRepo, VideoRepo};
use reelmark_events::bus::{PlatformEvent, EVENT_HOTSPOT_CREATED, EVENT_HOTSPOT_DELETED};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Hotspot row plus derived editor metadata: the 1-based display number
/// among assigned hotspots (`None` while no product is bound) and the
/// neighbouring hotspot ids in time order (no wraparound — `None` at the
/// ends).
#[derive(Debug, Serialize)]
pub struct HotspotResponse {
    #[serde(flatten)]
    pub hotspot: Hotspot,
    pub display_number: Option<usize>,
    pub prev_hotspot_id: Option<DbId>,
    pub next_hotspot_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_video(state: &AppState, id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))
}

/// Load a hotspot and verify it belongs to the given video.
async fn load_hotspot(state: &AppState, video_id: DbId, id: DbId) -> AppResult<Hotspot> {
    let hotspot = HotspotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotspot",
            id,
        }))?;
    if hotspot.video_id != video_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Hotspot",
            id,
        }));
    }
    Ok(hotspot)
}

/// Validate the optional configuration fields shared by create and update.
fn validate_config(
    style: Option<&str>,
    click_behavior: Option<&str>,
    scale: Option<f64>,
) -> AppResult<()> {
    if let Some(style) = style {
        hotspot_rules::validate_style(style)?;
    }
    if let Some(behavior) = click_behavior {
        hotspot_rules::validate_click_behavior(behavior)?;
    }
    if let Some(scale) = scale {
        hotspot_rules::validate_scale(scale)?;
    }
    Ok(())
}

/// Verify a referenced product exists before binding it.
async fn ensure_product_exists(state: &AppState, product_id: DbId) -> AppResult<()> {
    ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;
    Ok(())
}

/// Enrich a full listing of a video's hotspots with display numbers and
/// time-order neighbours.
fn build_responses(rows: Vec<Hotspot>) -> Vec<HotspotResponse> {
    let domain: Vec<reelmark_core::hotspot::Hotspot> =
        rows.iter().map(|r| r.to_domain()).collect();
    rows.into_iter()
        .map(|hotspot| {
            let display_number = navigation::display_number(&domain, hotspot.id);
            let prev_hotspot_id = navigation::prev_hotspot(&domain, hotspot.id).map(|h| h.id);
            let next_hotspot_id = navigation::next_hotspot(&domain, hotspot.id).map(|h| h.id);
            HotspotResponse {
                hotspot,
                display_number,
                prev_hotspot_id,
                next_hotspot_id,
            }
        })
        .collect()
}

/// Build the enriched response for a single hotspot of a video.
async fn single_response(
    state: &AppState,
    video_id: DbId,
    id: DbId,
) -> AppResult<HotspotResponse> {
    let rows = HotspotRepo::list_by_video(&state.pool, video_id).await?;
    build_responses(rows)
        .into_iter()
        .find(|r| r.hotspot.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotspot",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/videos/{video_id}/hotspots
pub async fn list_by_video(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<Vec<HotspotResponse>>> {
    load_video(&state, video_id).await?;
    let rows = HotspotRepo::list_by_video(&state.pool, video_id).await?;
    Ok(Json(build_responses(rows)))
}

/// POST /api/v1/videos/{video_id}/hotspots
pub async fn create(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<CreateHotspot>,
) -> AppResult<(StatusCode, Json<HotspotResponse>)> {
    let video = load_video(&state, video_id).await?;

    hotspot_rules::validate_window(input.time_start, input.time_end, video.duration_secs)?;
    hotspot_rules::validate_position(input.x, input.y)?;
    validate_config(
        input.style.as_deref(),
        input.click_behavior.as_deref(),
        input.scale,
    )?;
    if let Some(product_id) = input.product_id {
        ensure_product_exists(&state, product_id).await?;
    }

    let hotspot = HotspotRepo::create(&state.pool, video_id, &input).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_HOTSPOT_CREATED)
            .with_source("hotspot", hotspot.id)
            .with_payload(serde_json::json!({ "video_id": video_id })),
    );

    let response = single_response(&state, video_id, hotspot.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/videos/{video_id}/hotspots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((video_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<HotspotResponse>> {
    load_hotspot(&state, video_id, id).await?;
    Ok(Json(single_response(&state, video_id, id).await?))
}

/// PUT /api/v1/videos/{video_id}/hotspots/{id}
///
/// Attach a product or style, or adjust time/position. The effective time
/// window after the patch must still fit the video.
pub async fn update(
    State(state): State<AppState>,
    Path((video_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateHotspot>,
) -> AppResult<Json<HotspotResponse>> {
    let video = load_video(&state, video_id).await?;
    let existing = load_hotspot(&state, video_id, id).await?;

    let time_start = input.time_start.unwrap_or(existing.time_start);
    let time_end = input.time_end.unwrap_or(existing.time_end);
    hotspot_rules::validate_window(time_start, time_end, video.duration_secs)?;

    let x = input.x.unwrap_or(existing.x);
    let y = input.y.unwrap_or(existing.y);
    hotspot_rules::validate_position(x, y)?;

    validate_config(
        input.style.as_deref(),
        input.click_behavior.as_deref(),
        input.scale,
    )?;
    if let Some(product_id) = input.product_id {
        ensure_product_exists(&state, product_id).await?;
    }

    HotspotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotspot",
            id,
        }))?;

    Ok(Json(single_response(&state, video_id, id).await?))
}

/// DELETE /api/v1/videos/{video_id}/hotspots/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((video_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    load_hotspot(&state, video_id, id).await?;
    HotspotRepo::delete(&state.pool, id).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_HOTSPOT_DELETED)
            .with_source("hotspot", id)
            .with_payload(serde_json::json!({ "video_id": video_id })),
    );

    Ok(StatusCode::NO_CONTENT)
}
