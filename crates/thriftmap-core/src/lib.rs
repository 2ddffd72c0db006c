pub mod app_config;
pub mod config;
pub mod search;
pub mod store;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use search::{
    validate_radius, Coordinate, DEFAULT_RADIUS_M, MAX_RADIUS_M, MIN_RADIUS_M,
};
pub use store::{Store, DEFAULT_STORE_NAME, DEFAULT_STORE_TYPE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("radius must be between {min} and {max} meters, got {got}")]
    InvalidRadius { got: i64, min: u32, max: u32 },
}
