//! Failure folding for the two lookups.
//!
//! Neither function returns an error: geocoding failures collapse to `None`
//! and query failures become [`StoreQueryResult::Failed`], each logged where
//! it happens.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thriftmap_core::{Coordinate, Store};

use crate::error::OsmError;
use crate::nominatim::NominatimClient;
use crate::overpass::OverpassClient;
use crate::types::{OverpassElement, OverpassResponse};

/// Why a shop query produced no usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFailure {
    /// The query succeeded but matched nothing.
    NoStores,
    /// Network failure, timeout, or non-2xx status.
    RequestFailed,
    /// The body was not a JSON object.
    InvalidJson,
}

impl QueryFailure {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            QueryFailure::NoStores => "No stores found",
            QueryFailure::RequestFailed => "Overpass API request failed",
            QueryFailure::InvalidJson => "Invalid JSON response",
        }
    }
}

impl From<&OsmError> for QueryFailure {
    fn from(err: &OsmError) -> Self {
        match err {
            OsmError::Deserialize { .. } => QueryFailure::InvalidJson,
            OsmError::Http(_)
            | OsmError::CityNotFound(_)
            | OsmError::InvalidCoordinate { .. }
            | OsmError::InvalidBaseUrl { .. } => QueryFailure::RequestFailed,
        }
    }
}

/// Outcome of a shop query.
///
/// Serializes to the raw Overpass document on success and to
/// `{"error": <message>}` on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreQueryResult {
    /// Raw Overpass payload with at least one element.
    Found(OverpassResponse),
    Failed(QueryFailure),
}

impl StoreQueryResult {
    /// Number of raw elements; zero for failures.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            StoreQueryResult::Found(response) => response.elements().len(),
            StoreQueryResult::Failed(_) => 0,
        }
    }

    /// Elements with coordinates, mapped onto [`Store`].
    #[must_use]
    pub fn stores(&self) -> Vec<Store> {
        match self {
            StoreQueryResult::Found(response) => response
                .typed_elements()
                .filter_map(|element| OverpassElement::to_store(&element))
                .collect(),
            StoreQueryResult::Failed(_) => Vec::new(),
        }
    }
}

impl Serialize for StoreQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StoreQueryResult::Found(response) => response.serialize(serializer),
            StoreQueryResult::Failed(failure) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", failure.message())?;
                map.end()
            }
        }
    }
}

/// Geocodes `city`, logging and discarding any failure.
///
/// Returns `None` when the lookup fails for any reason or yields a
/// coordinate with a zero component.
pub async fn resolve_city(client: &NominatimClient, city: &str) -> Option<Coordinate> {
    match client.geocode(city).await {
        Ok(coordinate) if coordinate.is_resolved() => Some(coordinate),
        Ok(coordinate) => {
            tracing::warn!(
                city,
                latitude = coordinate.latitude,
                longitude = coordinate.longitude,
                "geocoder returned an unusable coordinate"
            );
            None
        }
        Err(e) => {
            tracing::warn!(city, error = %e, "error fetching city coordinates");
            None
        }
    }
}

/// Queries Overpass for second-hand shops around `center`.
pub async fn find_second_hand_shops(
    client: &OverpassClient,
    center: Coordinate,
    radius_m: u32,
) -> StoreQueryResult {
    tracing::info!(radius_m, "searching stores within radius");

    match client.find_shops(center, radius_m).await {
        Ok(response) if response.elements().is_empty() => {
            tracing::info!(
                latitude = center.latitude,
                longitude = center.longitude,
                "no stores found"
            );
            StoreQueryResult::Failed(QueryFailure::NoStores)
        }
        Ok(response) => StoreQueryResult::Found(response),
        Err(e) => {
            let failure = QueryFailure::from(&e);
            tracing::warn!(error = %e, failure = failure.message(), "overpass query failed");
            StoreQueryResult::Failed(failure)
        }
    }
}
