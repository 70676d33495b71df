use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;

use crate::schemas::AppState;
use crate::upstream::AnalysisUpstream;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";
pub const DEFAULT_CONFIG_FILE: &str = "stockcast";
const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 30;
const DEFAULT_CACHE_TTL_SECS: i64 = 300;
const DEFAULT_CACHE_CAPACITY: i64 = 256;

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Address the dashboard server listens on
    #[validate(length(min = 1, message = "bind_address must not be empty"))]
    pub bind_address: String,
    /// Base URL of the analysis service; requests go to `<upstream_url>/analyze`
    #[validate(length(min = 1, message = "upstream_url must not be empty"))]
    pub upstream_url: String,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
    /// Timeout of one upstream request
    #[validate(range(min = 1, message = "request_timeout_secs must be at least 1"))]
    pub request_timeout_secs: u64,
    /// Lifetime of cached analysis responses, 0 disables caching
    pub cache_ttl_secs: u64,
    #[validate(range(min = 1, message = "cache_capacity must be at least 1"))]
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS as u64,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS as u64,
            cache_capacity: DEFAULT_CACHE_CAPACITY as u64,
        }
    }
}

/// Values given on the command line. They take precedence over every other
/// configuration layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load the configuration from built-in defaults, the optional config
    /// file, `STOCKCAST_*` environment variables and finally `overrides`.
    pub fn load(config_file: &str, overrides: ConfigOverrides) -> Result<Self> {
        dotenvy::dotenv().ok();

        debug!("Loading configuration from file '{}' and environment", config_file);
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("upstream_url", DEFAULT_UPSTREAM_URL)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("cache_ttl_secs", DEFAULT_CACHE_TTL_SECS)?
            .set_default("cache_capacity", DEFAULT_CACHE_CAPACITY)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("STOCKCAST"))
            .build()
            .context("failed to read configuration")?;

        let config: ServerConfig = settings
            .try_deserialize()
            .context("invalid configuration")?;

        config.with_overrides(overrides).validated()
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(upstream_url) = overrides.upstream_url {
            self.upstream_url = upstream_url;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        self
    }

    /// Check field constraints and that the upstream URL parses.
    pub fn validated(self) -> Result<Self> {
        self.validate().context("invalid configuration")?;
        reqwest::Url::parse(&self.upstream_url)
            .with_context(|| format!("invalid upstream_url '{}'", self.upstream_url))?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Analysis cache, or `None` when caching is disabled.
    pub fn build_cache(&self) -> Option<Cache<String, String>> {
        if self.cache_ttl_secs == 0 {
            return None;
        }
        Some(
            Cache::builder()
                .max_capacity(self.cache_capacity)
                .time_to_live(Duration::from_secs(self.cache_ttl_secs))
                .build(),
        )
    }
}

/// Initialize application state from a resolved configuration
pub fn initialize_app_state(config: ServerConfig) -> Result<AppState> {
    let upstream = AnalysisUpstream::new(&config.upstream_url, config.request_timeout())?;
    let cache = config.build_cache();
    info!(
        upstream = %config.upstream_url,
        cache_enabled = cache.is_some(),
        "Application state initialized"
    );

    Ok(AppState {
        config: Arc::new(config),
        upstream,
        cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let config = ServerConfig::default().with_overrides(ConfigOverrides {
            bind_address: Some("127.0.0.1:8080".into()),
            upstream_url: None,
            static_dir: Some(PathBuf::from("dist")),
        });

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validated().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validated().is_err());

        let config = ServerConfig {
            upstream_url: "not a url".into(),
            ..ServerConfig::default()
        };
        assert!(config.validated().is_err());
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let config = ServerConfig {
            cache_ttl_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.build_cache().is_none());
        assert!(ServerConfig::default().build_cache().is_some());
    }
}
