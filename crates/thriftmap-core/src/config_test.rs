use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.nominatim_url, DEFAULT_NOMINATIM_URL);
    assert_eq!(cfg.overpass_url, DEFAULT_OVERPASS_URL);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.geocode_timeout_secs, 5);
    assert_eq!(cfg.overpass_timeout_secs, 10);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("THRIFTMAP_BIND_ADDR", "0.0.0.0:9000");
    map.insert("THRIFTMAP_LOG_LEVEL", "debug");
    map.insert("THRIFTMAP_NOMINATIM_URL", "http://localhost:7070/search");
    map.insert("THRIFTMAP_OVERPASS_URL", "http://localhost:7071/api/interpreter");
    map.insert("THRIFTMAP_USER_AGENT", "custom-agent/2.0");
    map.insert("THRIFTMAP_GEOCODE_TIMEOUT_SECS", "2");
    map.insert("THRIFTMAP_OVERPASS_TIMEOUT_SECS", "30");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:9000");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.nominatim_url, "http://localhost:7070/search");
    assert_eq!(cfg.overpass_url, "http://localhost:7071/api/interpreter");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.geocode_timeout_secs, 2);
    assert_eq!(cfg.overpass_timeout_secs, 30);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("THRIFTMAP_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THRIFTMAP_BIND_ADDR"),
        "expected InvalidEnvVar(THRIFTMAP_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("THRIFTMAP_GEOCODE_TIMEOUT_SECS", "five");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THRIFTMAP_GEOCODE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(THRIFTMAP_GEOCODE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("THRIFTMAP_OVERPASS_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THRIFTMAP_OVERPASS_TIMEOUT_SECS"),
        "expected InvalidEnvVar(THRIFTMAP_OVERPASS_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_user_agent() {
    let mut map = HashMap::new();
    map.insert("THRIFTMAP_USER_AGENT", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THRIFTMAP_USER_AGENT"),
        "expected InvalidEnvVar(THRIFTMAP_USER_AGENT), got: {result:?}"
    );
}
