use crate::config::{Config, ConfigError};
use crate::errors::AppError;
use crate::llm_client::BackendPair;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from [`Config`]. A credential problem is kept
    /// here and reported on every search instead of stopping the server.
    pub backends: Result<BackendPair, ConfigError>,
}

impl AppState {
    pub fn new(config: &Config, http: &reqwest::Client) -> Self {
        Self {
            backends: BackendPair::from_config(config, http),
        }
    }

    pub fn backends(&self) -> Result<&BackendPair, AppError> {
        self.backends.as_ref().map_err(|e| AppError::from(e.clone()))
    }
}
