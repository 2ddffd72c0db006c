use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "thriftmap/0.1 (second-hand store search)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(secs)
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let value = or_default(var, default);
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(value)
    };

    let bind_addr = parse_addr("THRIFTMAP_BIND_ADDR", "127.0.0.1:8000")?;
    let log_level = or_default("THRIFTMAP_LOG_LEVEL", "info");
    let nominatim_url = non_empty("THRIFTMAP_NOMINATIM_URL", DEFAULT_NOMINATIM_URL)?;
    let overpass_url = non_empty("THRIFTMAP_OVERPASS_URL", DEFAULT_OVERPASS_URL)?;
    let user_agent = non_empty("THRIFTMAP_USER_AGENT", DEFAULT_USER_AGENT)?;
    let geocode_timeout_secs = parse_secs("THRIFTMAP_GEOCODE_TIMEOUT_SECS", "5")?;
    let overpass_timeout_secs = parse_secs("THRIFTMAP_OVERPASS_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        nominatim_url,
        overpass_url,
        user_agent,
        geocode_timeout_secs,
        overpass_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
