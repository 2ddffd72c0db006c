//! Wire types for the Nominatim and Overpass JSON APIs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thriftmap_core::{Coordinate, Store};

use crate::error::OsmError;

/// One entry of a Nominatim `search?format=json` result list.
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimPlace {
    /// Parses the string coordinates into a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::InvalidCoordinate`] if either value is not a float.
    pub fn coordinate(&self) -> Result<Coordinate, OsmError> {
        let invalid = || OsmError::InvalidCoordinate {
            lat: self.lat.clone(),
            lon: self.lon.clone(),
        };
        let latitude: f64 = self.lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = self.lon.trim().parse().map_err(|_| invalid())?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

/// An Overpass `[out:json]` document, kept verbatim.
///
/// Callers get the raw payload back unchanged (`version`, `generator`,
/// `osm3s`, `elements`, ...). [`OverpassResponse::typed_elements`] offers a
/// typed view for mapping onto [`Store`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverpassResponse(Map<String, Value>);

impl OverpassResponse {
    #[must_use]
    pub fn new(raw: Map<String, Value>) -> Self {
        Self(raw)
    }

    /// Raw `elements` array; empty when the key is missing or not an array.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        self.0
            .get("elements")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Elements that parse as [`OverpassElement`]; others are skipped.
    pub fn typed_elements(&self) -> impl Iterator<Item = OverpassElement> + '_ {
        self.elements()
            .iter()
            .filter_map(|v| serde_json::from_value::<OverpassElement>(v.clone()).ok())
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// A single Overpass element (node, way or relation).
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// Maps the element onto a [`Store`], using the `name` and `shop` tags.
    ///
    /// Returns `None` for elements without coordinates (ways and relations
    /// fetched with `out body`).
    #[must_use]
    pub fn to_store(&self) -> Option<Store> {
        let (lat, lon) = (self.lat?, self.lon?);
        Some(Store::new(
            self.tags.get("name").map(String::as_str),
            lat,
            lon,
            self.tags.get("shop").map(String::as_str),
        ))
    }
}
