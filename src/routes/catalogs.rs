use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::{Created, DataResponse};
use crate::app::AppState;
use crate::domain::PricingCatalog;
use crate::error::{ApiError, ApiResult};
use crate::services::catalog_registry::is_valid_id;

/// List registered catalog ids
pub async fn list_catalogs(State(state): State<Arc<AppState>>) -> DataResponse<Vec<String>> {
    DataResponse::new(state.catalogs.ids())
}

/// Get a catalog by id
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Path(catalog_id): Path<String>,
) -> ApiResult<DataResponse<PricingCatalog>> {
    let catalog = state
        .catalogs
        .get(&catalog_id)
        .ok_or_else(|| ApiError::not_found(format!("Pricing catalog '{catalog_id}' not found")))?;

    Ok(DataResponse::new((*catalog).clone()))
}

/// Create or replace a catalog; persisted before it becomes visible
pub async fn put_catalog(
    State(state): State<Arc<AppState>>,
    Path(catalog_id): Path<String>,
    payload: Result<Json<PricingCatalog>, JsonRejection>,
) -> ApiResult<Response> {
    if !is_valid_id(&catalog_id) {
        return Err(ApiError::bad_request(
            "Catalog id must be 1-64 characters of letters, digits, '-' or '_'",
        ));
    }
    let Json(catalog) = payload?;

    let registry = state.catalogs.clone();
    let id = catalog_id.clone();
    let stored = catalog.clone();
    let created = tokio::task::spawn_blocking(move || registry.save(&id, stored))
        .await
        .map_err(anyhow::Error::from)??;

    tracing::info!(catalog_id = %catalog_id, created, "Stored pricing catalog");

    let body = DataResponse::new(catalog);
    Ok(if created {
        Created(body).into_response()
    } else {
        body.into_response()
    })
}
