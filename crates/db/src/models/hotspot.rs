//! Hotspot entity model and DTOs.

use reelmark_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hotspots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotspot {
    pub id: DbId,
    pub video_id: DbId,
    pub time_start: f64,
    pub time_end: f64,
    pub x: f64,
    pub y: f64,
    pub product_id: Option<DbId>,
    pub style: Option<String>,
    pub cta_label: Option<String>,
    pub click_behavior: Option<String>,
    pub scale: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hotspot {
    /// Project the row into the domain type consumed by the scene-state
    /// engine and navigation helpers.
    pub fn to_domain(&self) -> reelmark_core::hotspot::Hotspot {
        reelmark_core::hotspot::Hotspot {
            id: self.id,
            time_start: self.time_start,
            time_end: self.time_end,
            x: self.x,
            y: self.y,
            product_id: self.product_id,
            style: self.style.clone(),
            cta_label: self.cta_label.clone(),
            click_behavior: self.click_behavior.clone(),
            scale: self.scale,
        }
    }
}

/// DTO for creating a hotspot. The owning video comes from the request
/// path, not the body. Hotspots start unassigned and unstyled.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHotspot {
    pub time_start: f64,
    pub time_end: f64,
    pub x: f64,
    pub y: f64,
    pub product_id: Option<DbId>,
    pub style: Option<String>,
    pub cta_label: Option<String>,
    pub click_behavior: Option<String>,
    pub scale: Option<f64>,
}

/// DTO for updating a hotspot. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHotspot {
    pub time_start: Option<f64>,
    pub time_end: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub product_id: Option<DbId>,
    pub style: Option<String>,
    pub cta_label: Option<String>,
    pub click_behavior: Option<String>,
    pub scale: Option<f64>,
}
