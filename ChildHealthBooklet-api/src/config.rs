//! Runtime configuration read from the environment (and `.env`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

/// Frontend address allowed by default
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid HOST value '{0}'")]
    InvalidHost(String),

    /// Wildcards are rejected because credentials are allowed
    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to make credentialed cross-origin requests
    pub allowed_origins: Vec<HeaderValue>,
    /// Answer unknown booklets with 200 instead of 404
    pub legacy_not_found_status: bool,
    /// Where rendered booklets are archived, if anywhere
    pub booklet_output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)],
            legacy_not_found_status: false,
            booklet_output_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = match get("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => defaults.host,
        };

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => defaults.allowed_origins,
        };

        let legacy_not_found_status = get("LEGACY_NOT_FOUND_STATUS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let booklet_output_dir = get("BOOKLET_OUTPUT_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            allowed_origins,
            legacy_not_found_status,
            booklet_output_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_origins(value: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin.to_string()));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
