//! Video field validation.

use crate::error::CoreError;

/// Maximum length for a video title.
pub const MAX_VIDEO_TITLE_LENGTH: usize = 200;

/// Maximum length for a published slug.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Validate a video title: non-blank, within the length cap.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Video title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_VIDEO_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Video title exceeds maximum length of {MAX_VIDEO_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a video duration in seconds.
pub fn validate_duration(duration_secs: f64) -> Result<(), CoreError> {
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(CoreError::Validation(format!(
            "Video duration must be a non-negative number, got {duration_secs}"
        )));
    }
    Ok(())
}

/// Validate a slug: lowercase alphanumerics and hyphens, no leading or
/// trailing hyphen, within the length cap.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug exceeds maximum length of {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' may only contain lowercase letters, digits, and hyphens"
        )));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' must not start or end with a hyphen"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_title_accepted() {
        assert!(validate_title("Spring lookbook").is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn overlong_title_rejected() {
        assert!(validate_title(&"x".repeat(MAX_VIDEO_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn valid_durations_accepted() {
        assert!(validate_duration(0.0).is_ok());
        assert!(validate_duration(59.97).is_ok());
    }

    #[test]
    fn bad_durations_rejected() {
        assert!(validate_duration(-1.0).is_err());
        assert!(validate_duration(f64::NAN).is_err());
        assert!(validate_duration(f64::INFINITY).is_err());
    }

    #[test]
    fn valid_slugs_accepted() {
        assert!(validate_slug("spring-lookbook-24").is_ok());
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn bad_slugs_rejected() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Spring").is_err());
        assert!(validate_slug("spring lookbook").is_err());
        assert!(validate_slug("-spring").is_err());
        assert!(validate_slug("spring-").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }
}
