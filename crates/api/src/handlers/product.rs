//! Handlers for the `/products` resource.
//!
//! Products are create-and-read only: once stored they are immutable, and
//! hotspots reference them weakly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use reelmark_core::error::CoreError;
use reelmark_core::product as product_rules;
use reelmark_core::types::DbId;
use reelmark_db::models::product::{CreateProduct, Product};
use reelmark_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    product_rules::validate_title(&input.title)?;
    product_rules::validate_price(&input.price)?;
    product_rules::validate_link(&input.link)?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}
