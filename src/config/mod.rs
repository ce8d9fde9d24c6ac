mod types;

pub use types::*;

use crate::{Error, Result};
use std::str::FromStr;
use tracing::debug;

pub const API_KEY_VAR: &str = "GOOGLE_GEMINI_API_KEY";

/// Reads `.env` (if any) and the process environment once at startup.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
        Err(e) => return Err(Error::config(format!("Failed to read .env file: {}", e))),
    }

    Config::from_lookup(|key| std::env::var(key).ok())
}

impl Config {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = value(API_KEY_VAR)
            .ok_or_else(|| Error::config(format!("{} must be set", API_KEY_VAR)))?;

        let base_url = value("GEMINI_BASE_URL")
            .unwrap_or_else(default_base_url)
            .trim_end_matches('/')
            .to_string();

        let provider = ProviderConfig {
            api_key,
            model: value("GEMINI_MODEL").unwrap_or_else(default_model),
            base_url,
        };

        let server = ServerConfig {
            host: parse_or("HOST", value("HOST"), default_host())?,
            port: parse_or("PORT", value("PORT"), default_port())?,
            log_level: value("LOG_LEVEL").unwrap_or_else(default_log_level),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                value("MAX_UPLOAD_BYTES"),
                default_max_upload_bytes(),
            )?,
        };

        Ok(Self { provider, server })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}
