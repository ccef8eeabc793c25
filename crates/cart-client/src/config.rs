//! Configuration for the ordering client.
//!
//! Layered, later layers winning:
//! 1. built-in defaults
//! 2. an optional TOML file (`--config path`)
//! 3. environment variables:
//!    - `CART_API_BASE_URL`    (default: "http://127.0.0.1:5000")
//!    - `CART_TIMEOUT_SECS`    (default: "10")
//!    - `CART_ORDERS_PER_PAGE` (default: "10")
//!    - `CART_LOG_FILE`        (default: "cart-client.log")
//!    - `CART_BILL_FILE`       (default: "cart-bill.txt")
//! 4. CLI flags (applied by the binary)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the ordering API, without the `/api` prefix.
    pub api_base_url: String,

    /// Per-request timeout.
    pub timeout_secs: u64,

    /// Page size for the admin order list.
    pub orders_per_page: u32,

    /// Where tracing output goes while the terminal UI owns the screen.
    pub log_file: PathBuf,

    /// Where the "print bill" action writes the current cart.
    pub bill_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 10,
            orders_per_page: cart_protocol::endpoints::DEFAULT_PER_PAGE,
            log_file: PathBuf::from("cart-client.log"),
            bill_file: PathBuf::from("cart-bill.txt"),
        }
    }
}

impl ClientConfig {
    /// Defaults, then `path` (if any), then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ClientError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ClientError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ClientError> {
        toml::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Apply `CART_*` environment variables on top of `self`.
    pub fn with_env_overrides(mut self) -> Result<Self, ClientError> {
        if let Ok(url) = env::var("CART_API_BASE_URL") {
            self.api_base_url = url;
        }
        self.timeout_secs = read_env_or_default("CART_TIMEOUT_SECS", self.timeout_secs)?;
        self.orders_per_page = read_env_or_default("CART_ORDERS_PER_PAGE", self.orders_per_page)?;
        if let Ok(file) = env::var("CART_LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }
        if let Ok(file) = env::var("CART_BILL_FILE") {
            self.bill_file = PathBuf::from(file);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ClientError::Config("api_base_url must not be empty".into()));
        }
        if self.orders_per_page == 0 {
            return Err(ClientError::Config("orders_per_page must be at least 1".into()));
        }
        Ok(())
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T, ClientError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| ClientError::Config(format!("{key}: {e}"))),
        Err(_) => Ok(default),
    }
}
