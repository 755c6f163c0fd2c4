//! Shared application state injected into every Axum handler.

use std::sync::Arc;
use std::time::Duration;

use postforge_core::{Catalog, CompletionGateway, GatewayConfig, GenerateError};

use crate::config::Config;
use crate::history::HistoryStore;

/// State shared across all HTTP handlers.
///
/// Everything here is immutable after startup except the history store,
/// which serialises its own access.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Platform / tone configuration tables.
    pub catalog: Arc<Catalog>,
    /// Outbound completion client.
    pub gateway: Arc<CompletionGateway>,
    /// Per-session rolling generation history.
    pub history: Arc<HistoryStore>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, GenerateError> {
        let gateway = CompletionGateway::new(GatewayConfig {
            endpoint: config.upstream_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })?;
        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::default()),
            gateway: Arc::new(gateway),
            history: Arc::new(HistoryStore::default()),
        })
    }
}
