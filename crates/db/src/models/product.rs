//! Product entity model and DTO.
//!
//! Products are immutable once stored: there is no update DTO. Hotspots
//! reference them weakly via `product_id`.

use reelmark_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub title: String,
    /// Free text, currency-ambiguous. Display-only; never parsed.
    pub price: String,
    pub link: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub price: String,
    pub link: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}
