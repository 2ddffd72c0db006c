//! HTTP client for the Overpass `interpreter` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use thriftmap_core::Coordinate;

use crate::error::OsmError;
use crate::types::OverpassResponse;

/// Values of the OSM `shop` tag that count as a second-hand store.
pub const SHOP_TAG_VALUES: [&str; 3] = ["second_hand", "charity", "thrift"];

/// Builds the Overpass QL query for shop nodes within `radius_m` meters of
/// `center`.
#[must_use]
pub fn shop_query(center: Coordinate, radius_m: u32) -> String {
    format!(
        "[out:json];\n(\nnode[\"shop\"~\"{shops}\"](around:{radius_m},{lat},{lon});\n);\nout body;",
        shops = SHOP_TAG_VALUES.join("|"),
        lat = center.latitude,
        lon = center.longitude,
    )
}

/// Client for Overpass QL queries sent as the `data` query parameter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    base_url: Url,
}

impl OverpassClient {
    /// Creates a client for the interpreter endpoint at `base_url`.
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

    /// Fetches second-hand, charity and thrift shop nodes around `center`.
    ///
    /// An empty `elements` array is not an error at this level.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not a JSON object.
    pub async fn find_shops(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<OverpassResponse, OsmError> {
        let url = self.query_url(&shop_query(center, radius_m));
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
            context: format!(
                "overpass around:{radius_m},{},{}",
                center.latitude, center.longitude
            ),
            source: e,
        })
    }

    fn query_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("data", query);
        url
    }
}
