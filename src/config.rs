//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ASSETS_DIR: &str = "public/assets";
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BACKEND_URL: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
    pub assets_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: storefront API origin, default `http://127.0.0.1:8000`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `ASSETS_DIR`: uploaded images served at `/assets`, default `public/assets`
    /// - `MAX_BODY_BYTES`: proxied request body limit, default 20 MiB
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` is not a port number or `BACKEND_URL` is
    /// not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: env_parse("BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS),
            connect_secs: env_parse("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };
        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR));
        let max_body_bytes = env_parse("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES);

        Ok(Self { port, backend_url, timeouts, assets_dir, max_body_bytes })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}
