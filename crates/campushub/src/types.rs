//! Shared service configuration and state.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiError, BackendClient, BackendClientConfig};
use crate::cache::CatalogCacheState;
use crate::store::EntityStore;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the academic backend
    pub backend_url: String,
    /// Address this service listens on
    pub bind_addr: String,
    /// TTL for cached catalog snapshots
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3333".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
            cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: std::env::var("CAMPUSHUB_BACKEND_URL")
                .unwrap_or(defaults.backend_url),
            bind_addr: std::env::var("CAMPUSHUB_BIND_ADDR").unwrap_or(defaults.bind_addr),
            cache_ttl: std::env::var("CAMPUSHUB_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }
}

/// Shared state handed to every request handler.
pub struct AppState {
    pub config: AppConfig,
    pub client: BackendClient,
    pub store: EntityStore,
    pub catalog_cache: Arc<CatalogCacheState>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let client = BackendClient::new(&BackendClientConfig {
            base_url: config.backend_url.clone(),
            ..Default::default()
        })?;
        let catalog_cache = Arc::new(CatalogCacheState::with_ttl(config.cache_ttl));

        Ok(Self {
            config,
            client,
            store: EntityStore::new(),
            catalog_cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert!(config.backend_url.starts_with("http://"));
    }
}
