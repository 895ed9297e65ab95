pub mod catalogs;
pub mod estimates;
pub mod health;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Estimates
        .route("/estimate/calculate", post(estimates::calculate))
        // Pricing catalogs
        .route("/catalogs", get(catalogs::list_catalogs))
        .route(
            "/catalogs/:catalog_id",
            get(catalogs::get_catalog).put(catalogs::put_catalog),
        )
}
