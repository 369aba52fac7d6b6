//! Product field validation.
//!
//! Products are immutable once stored: there is no update path, only
//! create-time validation. `price` is deliberately free text — catalog
//! sources disagree on currency formatting and the field is display-only.

use validator::ValidateUrl;

use crate::error::CoreError;

/// Maximum length for a product title.
pub const MAX_PRODUCT_TITLE_LENGTH: usize = 300;

/// Maximum length for the free-text price field.
pub const MAX_PRICE_LENGTH: usize = 40;

/// Validate a product title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_PRODUCT_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Product title exceeds maximum length of {MAX_PRODUCT_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a product link.
pub fn validate_link(link: &str) -> Result<(), CoreError> {
    if !link.validate_url() {
        return Err(CoreError::Validation(format!(
            "Product link '{link}' is not a valid URL"
        )));
    }
    Ok(())
}

/// Validate the free-text price field. Content is unconstrained beyond
/// being non-blank and bounded.
pub fn validate_price(price: &str) -> Result<(), CoreError> {
    if price.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product price must not be empty".to_string(),
        ));
    }
    if price.len() > MAX_PRICE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Product price exceeds maximum length of {MAX_PRICE_LENGTH} characters"
        )));
    }
    Ok(())
}
