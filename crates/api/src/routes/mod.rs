pub mod health;
pub mod product;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                                    list, create
/// /videos/{id}                               get, update, delete
/// /videos/{id}/transition                    lifecycle transition (POST)
/// /videos/{id}/scene-state                   scene snapshot at ?time=T (GET)
/// /videos/{id}/hotspots                      list, create
/// /videos/{id}/hotspots/{hotspot_id}         get, update, delete
/// /videos/{id}/cta                           get, upsert (PUT), delete
///
/// /products                                  list, create
/// /products/{id}                             get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", video::router())
        .nest("/products", product::router())
}
