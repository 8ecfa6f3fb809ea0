//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::pipeline::CloneService;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Synthesis pipeline
    pub clone_service: Arc<CloneService>,
}

impl AppState {
    pub fn new(config: Config, clone_service: CloneService) -> Self {
        Self {
            config: Arc::new(config),
            clone_service: Arc::new(clone_service),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
