//! Hotspot domain type, completion predicate, and field validation.
//!
//! A hotspot is a time- and position-anchored interactive marker on a
//! video, optionally bound to a product and a visual style. The completion
//! predicate defined here ([`Hotspot::is_complete`]) is the single source
//! of truth for every higher-level state derivation — do not re-derive it
//! elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Style constants
// ---------------------------------------------------------------------------

/// Full product card with thumbnail, title, and price.
pub const STYLE_CARD: &str = "card";
/// Compact pill showing title only.
pub const STYLE_PILL: &str = "pill";
/// Price tag anchored to the marker dot.
pub const STYLE_TAG: &str = "tag";
/// Bare marker dot, product revealed on tap.
pub const STYLE_MINIMAL: &str = "minimal";

/// All valid visual template identifiers.
pub const VALID_HOTSPOT_STYLES: &[&str] = &[STYLE_CARD, STYLE_PILL, STYLE_TAG, STYLE_MINIMAL];

// ---------------------------------------------------------------------------
// Click behavior constants
// ---------------------------------------------------------------------------

/// Tapping the hotspot opens the product link directly.
pub const CLICK_OPEN_LINK: &str = "open_link";
/// Tapping the hotspot expands the in-player product card.
pub const CLICK_SHOW_CARD: &str = "show_card";

/// All valid click behavior values.
pub const VALID_CLICK_BEHAVIORS: &[&str] = &[CLICK_OPEN_LINK, CLICK_SHOW_CARD];

// ---------------------------------------------------------------------------
// Scale bounds
// ---------------------------------------------------------------------------

/// Smallest allowed marker scale factor.
pub const MIN_HOTSPOT_SCALE: f64 = 0.5;
/// Largest allowed marker scale factor.
pub const MAX_HOTSPOT_SCALE: f64 = 3.0;

// ---------------------------------------------------------------------------
// Hotspot
// ---------------------------------------------------------------------------

/// A time-anchored, product-bindable marker on a video.
///
/// `time_start <= time_end` and both lie within `[0, video.duration]` for
/// well-formed hotspots; the scene-state engine does not re-validate this
/// (validation happens at creation/update time, see [`validate_window`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: DbId,
    /// First second (inclusive) at which the hotspot is shown.
    pub time_start: f64,
    /// Last second (inclusive) at which the hotspot is shown. Equal to
    /// `time_start` for zero-duration hotspots.
    pub time_end: f64,
    /// Normalized horizontal position in `[0, 1]` relative to the frame.
    pub x: f64,
    /// Normalized vertical position in `[0, 1]` relative to the frame.
    pub y: f64,
    /// Weak reference to the bound product. `None` means unassigned.
    pub product_id: Option<DbId>,
    /// Visual template identifier. `None` (or empty) means the layout has
    /// not been configured yet.
    pub style: Option<String>,
    pub cta_label: Option<String>,
    pub click_behavior: Option<String>,
    pub scale: Option<f64>,
}

impl Hotspot {
    /// A hotspot is complete iff it has both a bound product and a
    /// configured (non-empty) visual style.
    pub fn is_complete(&self) -> bool {
        self.product_id.is_some() && self.style.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// A hotspot is assigned once a product is bound, regardless of style.
    pub fn is_assigned(&self) -> bool {
        self.product_id.is_some()
    }

    /// Whether `[time_start, time_end]` contains `t` (closed interval).
    ///
    /// Exact `f64` comparison, no epsilon: hotspots at their boundary
    /// second are active, and zero-duration hotspots are active at their
    /// single second. Boundary flicker at sub-frame precision is inherited
    /// player behaviour.
    pub fn is_active_at(&self, t: f64) -> bool {
        self.time_start <= t && t <= self.time_end
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a hotspot time window against the owning video's duration.
///
/// Checks:
/// - `time_start >= 0`
/// - `time_end >= time_start`
/// - `time_end <= duration_secs`
pub fn validate_window(time_start: f64, time_end: f64, duration_secs: f64) -> Result<(), CoreError> {
    if !time_start.is_finite() || !time_end.is_finite() {
        return Err(CoreError::Validation(
            "Hotspot times must be finite numbers".to_string(),
        ));
    }
    if time_start < 0.0 {
        return Err(CoreError::Validation(format!(
            "time_start must be >= 0, got {time_start}"
        )));
    }
    if time_end < time_start {
        return Err(CoreError::Validation(format!(
            "time_end ({time_end}) must be >= time_start ({time_start})"
        )));
    }
    if time_end > duration_secs {
        return Err(CoreError::Validation(format!(
            "time_end ({time_end}) exceeds video duration ({duration_secs})"
        )));
    }
    Ok(())
}

/// Validate a normalized frame position.
pub fn validate_position(x: f64, y: f64) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&x) {
        return Err(CoreError::Validation(format!(
            "x must be between 0.0 and 1.0, got {x}"
        )));
    }
    if !(0.0..=1.0).contains(&y) {
        return Err(CoreError::Validation(format!(
            "y must be between 0.0 and 1.0, got {y}"
        )));
    }
    Ok(())
}

/// Validate that a style string is one of the known visual templates.
pub fn validate_style(style: &str) -> Result<(), CoreError> {
    if VALID_HOTSPOT_STYLES.contains(&style) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown hotspot style '{style}'. Valid styles: {}",
            VALID_HOTSPOT_STYLES.join(", ")
        )))
    }
}

/// Validate a click behavior value.
pub fn validate_click_behavior(behavior: &str) -> Result<(), CoreError> {
    if VALID_CLICK_BEHAVIORS.contains(&behavior) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown click behavior '{behavior}'. Valid behaviors: {}",
            VALID_CLICK_BEHAVIORS.join(", ")
        )))
    }
}

/// Validate a marker scale factor.
pub fn validate_scale(scale: f64) -> Result<(), CoreError> {
    if !(MIN_HOTSPOT_SCALE..=MAX_HOTSPOT_SCALE).contains(&scale) {
        return Err(CoreError::Validation(format!(
            "scale must be between {MIN_HOTSPOT_SCALE} and {MAX_HOTSPOT_SCALE}, got {scale}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
