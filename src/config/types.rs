use std::{fmt, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub max_upload_bytes: usize,
}

// Keeps the credential out of logs and panic messages.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub(crate) fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

pub(crate) fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub(crate) fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

pub(crate) fn default_port() -> u16 {
    3000
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}
