use std::sync::{Arc, Mutex};

use reelmark_events::{DedupWindow, EventBus};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelmark_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Centralized event bus for publishing platform events.
    pub event_bus: Arc<EventBus>,
    /// Dedup cache for scene-state observation telemetry. Scoped to this
    /// server instance and bounded; see `reelmark_events::dedup`.
    pub scene_telemetry: Arc<Mutex<DedupWindow>>,
}
