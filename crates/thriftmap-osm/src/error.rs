use thiserror::Error;

/// Errors returned by the Nominatim and Overpass clients.
#[derive(Debug, Error)]
pub enum OsmError {
    /// Network failure, timeout, or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Nominatim answered with an empty result list.
    #[error("no geocoding result for \"{0}\"")]
    CityNotFound(String),

    /// Nominatim returned a place whose coordinates are not usable numbers.
    #[error("unusable coordinates lat={lat} lon={lon}")]
    InvalidCoordinate { lat: String, lon: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
