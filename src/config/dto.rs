use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
    pub disable_proxy: bool,
}
