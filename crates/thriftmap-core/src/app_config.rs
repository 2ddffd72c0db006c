use std::net::SocketAddr;

/// Runtime settings for the server and its two outbound clients.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub nominatim_url: String,
    pub overpass_url: String,
    /// Sent as `User-Agent` on every outbound request. Nominatim's usage
    /// policy rejects anonymous clients.
    pub user_agent: String,
    pub geocode_timeout_secs: u64,
    pub overpass_timeout_secs: u64,
}
