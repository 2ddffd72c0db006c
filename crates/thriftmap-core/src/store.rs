use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_NAME: &str = "Unnamed Store";
pub const DEFAULT_STORE_TYPE: &str = "second_hand";

/// A second-hand shop as exposed by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default = "default_name")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_type() -> String {
    DEFAULT_STORE_TYPE.to_string()
}

impl Store {
    /// Builds a store, substituting the defaults for missing or blank fields.
    #[must_use]
    pub fn new(name: Option<&str>, latitude: f64, longitude: f64, kind: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            name: pick(name, DEFAULT_STORE_NAME),
            latitude,
            longitude,
            kind: pick(kind, DEFAULT_STORE_TYPE),
        }
    }
}
