//! Route definitions for videos and their nested resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{hotspot, video, video_cta};
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /                                   list
/// POST   /                                   create
/// GET    /{id}                               get_by_id
/// PUT    /{id}                               update
/// DELETE /{id}                               delete
/// POST   /{id}/transition                    transition
/// GET    /{id}/scene-state                   scene_state
///
/// GET    /{id}/hotspots                      list_by_video
/// POST   /{id}/hotspots                      create
/// GET    /{id}/hotspots/{hotspot_id}         get_by_id
/// PUT    /{id}/hotspots/{hotspot_id}         update
/// DELETE /{id}/hotspots/{hotspot_id}         delete
///
/// PUT    /{id}/cta                           upsert
/// GET    /{id}/cta                           get_by_video
/// DELETE /{id}/cta                           delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::create))
        .route(
            "/{id}",
            get(video::get_by_id)
                .put(video::update)
                .delete(video::delete),
        )
        .route("/{id}/transition", post(video::transition))
        .route("/{id}/scene-state", get(video::scene_state))
        .route(
            "/{id}/hotspots",
            get(hotspot::list_by_video).post(hotspot::create),
        )
        .route(
            "/{id}/hotspots/{hotspot_id}",
            get(hotspot::get_by_id)
                .put(hotspot::update)
                .delete(hotspot::delete),
        )
        .route(
            "/{id}/cta",
            put(video_cta::upsert)
                .get(video_cta::get_by_video)
                .delete(video_cta::delete),
        )
}
