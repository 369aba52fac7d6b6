//! Scene-state engine.
//!
//! Maps (hotspot collection, playback time) to a tagged scene state plus
//! the derived collections UI consumers render from. Pure, total, and
//! cheap enough to call on every player timeupdate tick: a single linear
//! scan plus one sort of the future set, no I/O, no caching.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::hotspot::Hotspot;

// ---------------------------------------------------------------------------
// SceneState
// ---------------------------------------------------------------------------

/// The editing prompt for a single playback instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneState {
    /// The video has no hotspots at all.
    NoHotspots,
    /// Every hotspot on the video is complete. Video-wide: overrides the
    /// time-local tags below.
    AllDone,
    /// Nothing active at this instant, but more hotspots lie ahead.
    NoHotspotsHere,
    /// At least one hotspot needs a product or style attached.
    NeedsConfiguration,
    /// Everything active here is complete; more hotspots lie ahead.
    AllCompleteHere,
}

impl SceneState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoHotspots => "no_hotspots",
            Self::AllDone => "all_done",
            Self::NoHotspotsHere => "no_hotspots_here",
            Self::NeedsConfiguration => "needs_configuration",
            Self::AllCompleteHere => "all_complete_here",
        }
    }
}

// ---------------------------------------------------------------------------
// SceneSnapshot
// ---------------------------------------------------------------------------

/// The derived, non-persisted result of evaluating the engine at one
/// instant. Borrows from the input collection; recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot<'a> {
    /// The selected scene tag (first-match priority, see [`compute_scene_state`]).
    pub state: SceneState,
    /// Hotspots whose `[time_start, time_end]` contains the current time.
    pub active: Vec<&'a Hotspot>,
    /// Hotspots starting strictly after the current time, ascending by
    /// `time_start` (ties broken by ascending `id`).
    pub future: Vec<&'a Hotspot>,
    /// Hotspots still missing a product or style. Time-independent.
    pub incomplete: Vec<&'a Hotspot>,
    /// Hotspots with both product and style. Time-independent.
    pub complete: Vec<&'a Hotspot>,
    /// First future hotspot, if any.
    pub next_hotspot: Option<&'a Hotspot>,
    /// `time_start` of the first future hotspot, if any.
    pub next_hotspot_time: Option<f64>,
    pub all_complete: bool,
    pub total_hotspots: usize,
    pub complete_count: usize,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the scene snapshot for `hotspots` at `current_time`.
///
/// Total over all inputs: an out-of-range `current_time` simply yields no
/// active hotspots, and malformed hotspots (e.g. inverted windows) flow
/// through unvalidated — validation is the writer's concern, not the
/// engine's.
///
/// Tag selection, first match wins:
/// 1. no hotspots at all         → [`SceneState::NoHotspots`]
/// 2. every hotspot complete     → [`SceneState::AllDone`]
/// 3. none active, some ahead    → [`SceneState::NoHotspotsHere`]
/// 4. an active one incomplete   → [`SceneState::NeedsConfiguration`]
/// 5. active all complete, more ahead → [`SceneState::AllCompleteHere`]
/// 6. none active, none ahead    → `NeedsConfiguration` if anything
///    anywhere is incomplete, else `AllDone`
/// 7. fallback                   → `AllDone`
pub fn compute_scene_state(hotspots: &[Hotspot], current_time: f64) -> SceneSnapshot<'_> {
    let active: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|h| h.is_active_at(current_time))
        .collect();

    let mut future: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|h| h.time_start > current_time)
        .collect();
    future.sort_by(|a, b| {
        a.time_start
            .partial_cmp(&b.time_start)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    let (complete, incomplete): (Vec<&Hotspot>, Vec<&Hotspot>) =
        hotspots.iter().partition(|h| h.is_complete());

    let all_complete = incomplete.is_empty();
    let next_hotspot = future.first().copied();
    let next_hotspot_time = next_hotspot.map(|h| h.time_start);

    let state = if hotspots.is_empty() {
        SceneState::NoHotspots
    } else if all_complete {
        SceneState::AllDone
    } else if active.is_empty() && !future.is_empty() {
        SceneState::NoHotspotsHere
    } else if active.iter().any(|h| !h.is_complete()) {
        SceneState::NeedsConfiguration
    } else if !active.is_empty() && !future.is_empty() {
        SceneState::AllCompleteHere
    } else if active.is_empty() && future.is_empty() {
        if incomplete.is_empty() {
            SceneState::AllDone
        } else {
            SceneState::NeedsConfiguration
        }
    } else {
        SceneState::AllDone
    };

    SceneSnapshot {
        state,
        total_hotspots: hotspots.len(),
        complete_count: complete.len(),
        active,
        future,
        incomplete,
        complete,
        next_hotspot,
        next_hotspot_time,
        all_complete,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------
