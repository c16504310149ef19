//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub bcv_url: String,
    pub cache_ttl: chrono::Duration,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so the service starts with no
    /// environment at all.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let bcv_url =
            env::var("BCV_URL").unwrap_or_else(|_| "https://www.bcv.org.ve/".to_string());

        let ttl_secs: i64 = env::var("RATE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "600".to_string())
            .parse()?;

        let timeout_secs: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()?;

        Ok(Self {
            port,
            bcv_url,
            cache_ttl: chrono::Duration::seconds(ttl_secs),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
