//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the console (default: http://localhost:3001)
//! - `ADMIN_DEFAULT_LANGUAGE` - Language used when no valid preference is
//!   stored (one of `en`, `hi`, `ar`; default: en)

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use stride_core::Language;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the console
    pub base_url: String,
    /// Language active when no valid persisted preference exists
    pub default_language: Language,
}

impl AdminConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&vars)
    }

    /// Loads configuration from an explicit variable map.
    ///
    /// Split out from [`Self::from_env`] so tests can exercise parsing
    /// without mutating process state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = parse_or(vars, "ADMIN_HOST", DEFAULT_HOST)?;
        let port = parse_or(vars, "ADMIN_PORT", DEFAULT_PORT)?;
        let base_url = vars
            .get("ADMIN_BASE_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let default_language = parse_or(vars, "ADMIN_DEFAULT_LANGUAGE", Language::default())?;

        Ok(Self {
            host,
            port,
            base_url,
            default_language,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the console is served over HTTPS (drives cookie security).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Parses an optional variable, falling back to `default` when absent.
fn parse_or<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), raw.clone())),
    }
}
