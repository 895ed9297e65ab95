use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::ApiResponse;
use crate::app::AppState;
use crate::domain::{lenient, CostBreakdown, PricingCatalog, ProjectConfiguration};
use crate::engine::calculate_estimate;
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestId;

/// Catalog id reported when the request carried its own catalog
const INLINE_CATALOG_ID: &str = "inline";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculateEstimateRequest {
    #[serde(deserialize_with = "lenient::or_default")]
    pub configuration: ProjectConfiguration,
    pub catalog: Option<PricingCatalog>,
    pub catalog_id: Option<String>,
}

/// Price a project configuration against a catalog
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    payload: Result<Json<CalculateEstimateRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<CostBreakdown>> {
    let Json(req) = payload?;

    let (catalog_id, catalog) = match (req.catalog, req.catalog_id) {
        (Some(inline), _) => (INLINE_CATALOG_ID.to_string(), Arc::new(inline)),
        (None, requested) => {
            let id = requested.unwrap_or_else(|| state.settings.default_catalog_id.clone());
            let catalog = state
                .catalogs
                .get(&id)
                .ok_or_else(|| ApiError::not_found(format!("Pricing catalog '{id}' not found")))?;
            (id, catalog)
        }
    };

    let breakdown = calculate_estimate(&req.configuration, &catalog);

    tracing::info!(
        request_id = request_id.as_str(),
        catalog_id = %catalog_id,
        square_footage = breakdown.square_footage,
        total = %breakdown.total,
        "Calculated estimate"
    );

    Ok(ApiResponse::with_meta(
        breakdown,
        json!({
            "catalogId": catalog_id,
            "calculatedAt": chrono::Utc::now(),
        }),
    ))
}
