use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use thriftmap_core::{validate_radius, Coordinate, Store};
use thriftmap_osm::{find_second_hand_shops, resolve_city, QueryFailure, StoreQueryResult};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const CITY_NOT_FOUND: &str = "City not found or API failed";
pub(super) const DEBUG_MESSAGE: &str = "Store search executed successfully";

#[derive(Debug, Deserialize)]
pub(super) struct StoreSearchParams {
    pub radius: Option<i64>,
}

/// Body of `GET /api/stores/{city}`. `stores` is either the raw Overpass
/// document or `{"error": ...}`.
#[derive(Debug, Serialize)]
pub(super) struct StoreSearchResponse {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_stores: usize,
    pub stores: StoreQueryResult,
    pub debug_message: &'static str,
}

/// Body of `GET /api/stores/{city}/summary`.
#[derive(Debug, Serialize)]
pub(super) struct StoreSummaryResponse {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_stores: usize,
    pub stores: Vec<Store>,
}

fn radius_from(params: Result<Query<StoreSearchParams>, QueryRejection>) -> Result<u32, ApiError> {
    let Query(params) = params.map_err(|e| {
        ApiError::new("validation_error", format!("radius must be an integer: {}", e.body_text()))
    })?;
    validate_radius(params.radius).map_err(|e| ApiError::new("validation_error", e.to_string()))
}

async fn locate(state: &AppState, city: &str) -> Result<Coordinate, ApiError> {
    if city.trim().is_empty() {
        return Err(ApiError::new("not_found", CITY_NOT_FOUND));
    }
    resolve_city(&state.nominatim, city)
        .await
        .ok_or_else(|| ApiError::new("not_found", CITY_NOT_FOUND))
}

/// Geocodes `city` and returns the shops around it.
///
/// Only a geocoding failure changes the status (404); a failed shop query is
/// reported inside `stores` with a 200.
pub(super) async fn search_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(city): Path<String>,
    params: Result<Query<StoreSearchParams>, QueryRejection>,
) -> Result<Json<StoreSearchResponse>, ApiError> {
    let radius = radius_from(params)?;
    tracing::info!(request_id = %req_id.0, city = %city, radius, "received store search");

    let center = locate(&state, &city).await?;
    let stores = find_second_hand_shops(&state.overpass, center, radius).await;

    Ok(Json(StoreSearchResponse {
        total_stores: stores.element_count(),
        city,
        latitude: center.latitude,
        longitude: center.longitude,
        stores,
        debug_message: DEBUG_MESSAGE,
    }))
}

/// Same lookup as [`search_stores`], mapped onto [`Store`] records.
///
/// An empty match is a 200 with no stores; an unreachable or malformed
/// Overpass answer is a 502.
pub(super) async fn store_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(city): Path<String>,
    params: Result<Query<StoreSearchParams>, QueryRejection>,
) -> Result<Json<StoreSummaryResponse>, ApiError> {
    let radius = radius_from(params)?;
    tracing::info!(request_id = %req_id.0, city = %city, radius, "received store summary");

    let center = locate(&state, &city).await?;
    let stores = match find_second_hand_shops(&state.overpass, center, radius).await {
        StoreQueryResult::Failed(QueryFailure::NoStores) => Vec::new(),
        StoreQueryResult::Failed(failure) => {
            return Err(ApiError::new("upstream_error", failure.message()));
        }
        found @ StoreQueryResult::Found(_) => found.stores(),
    };

    Ok(Json(StoreSummaryResponse {
        total_stores: stores.len(),
        city,
        latitude: center.latitude,
        longitude: center.longitude,
        stores,
    }))
}

#[cfg(test)]
#[path = "stores_test.rs"]
mod tests;
