//! Video call-to-action constants and validation.
//!
//! A video carries at most one CTA (enforced by a unique constraint at
//! the persistence layer); its `mode` controls when the CTA is shown
//! during playback.

use validator::ValidateUrl;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Mode constants
// ---------------------------------------------------------------------------

/// CTA is configured but not shown.
pub const CTA_MODE_OFF: &str = "off";
/// CTA appears once playback reaches the end of the video.
pub const CTA_MODE_SHOW_AT_END: &str = "show_at_end";
/// CTA is overlaid for the whole duration.
pub const CTA_MODE_ALWAYS_VISIBLE: &str = "always_visible";

/// All valid CTA modes.
pub const VALID_CTA_MODES: &[&str] = &[CTA_MODE_OFF, CTA_MODE_SHOW_AT_END, CTA_MODE_ALWAYS_VISIBLE];

/// Maximum length for a CTA label.
pub const MAX_CTA_LABEL_LENGTH: usize = 80;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a CTA mode string is one of the accepted values.
pub fn validate_mode(mode: &str) -> Result<(), CoreError> {
    if VALID_CTA_MODES.contains(&mode) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid CTA mode '{mode}'. Must be one of: {}",
            VALID_CTA_MODES.join(", ")
        )))
    }
}

/// Validate a CTA label: non-blank, within the length cap.
pub fn validate_label(label: &str) -> Result<(), CoreError> {
    if label.trim().is_empty() {
        return Err(CoreError::Validation(
            "CTA label must not be empty".to_string(),
        ));
    }
    if label.len() > MAX_CTA_LABEL_LENGTH {
        return Err(CoreError::Validation(format!(
            "CTA label exceeds maximum length of {MAX_CTA_LABEL_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a CTA target URL.
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    if !url.validate_url() {
        return Err(CoreError::Validation(format!(
            "CTA url '{url}' is not a valid URL"
        )));
    }
    Ok(())
}
