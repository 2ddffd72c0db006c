//! HTTP client for the Nominatim `search` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use thriftmap_core::Coordinate;

use crate::error::OsmError;
use crate::types::NominatimPlace;

/// Client for Nominatim free-text geocoding.
///
/// Nominatim's usage policy requires an identifying `User-Agent`; requests
/// without one are blocked.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client for the `search` endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`OsmError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        let base_url = Url::parse(base_url).map_err(|e| OsmError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves `city` to the coordinates of the first Nominatim match.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not a JSON result list.
    /// - [`OsmError::CityNotFound`] if the result list is empty.
    /// - [`OsmError::InvalidCoordinate`] if the first match has non-numeric
    ///   coordinates.
    pub async fn geocode(&self, city: &str) -> Result<Coordinate, OsmError> {
        let url = self.search_url(city);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
                context: format!("nominatim search(q={city})"),
                source: e,
            })?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| OsmError::CityNotFound(city.to_owned()))?;

        tracing::debug!(
            city,
            display_name = place.display_name.as_deref().unwrap_or_default(),
            "nominatim match"
        );

        place.coordinate()
    }

    fn search_url(&self, city: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("format", "json");
        url
    }
}
