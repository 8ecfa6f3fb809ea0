//! Configuration management for the clone server
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CloneError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/tts-clone.yaml";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CloneError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| CloneError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the effective startup configuration
    ///
    /// Reads the YAML file when it exists (defaults otherwise), applies
    /// environment overrides, then validates. Any failure is fatal to startup.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let service = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            info!("Loading configuration from: {:?}", path);
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CloneError::Config(format!("Failed to read config file: {}", e)))?;
            serde_yaml::from_str(&content)
                .map_err(|e| CloneError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            ServiceConfig::default()
        };

        let mut config = Self { service };
        config.service.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides for the bind address, then re-validate
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) -> Result<()> {
        if let Some(host) = host {
            self.service.server.host = host;
        }
        if let Some(port) = port {
            self.service.server.port = port;
        }
        self.validate()
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get translation configuration
    pub fn translation(&self) -> &TranslationConfig {
        &self.service.translation
    }

    /// Get synthesis configuration
    pub fn synthesis(&self) -> &SynthesisConfig {
        &self.service.synthesis
    }

    /// Get language configuration
    pub fn language(&self) -> &LanguageConfig {
        &self.service.language
    }

    /// Get scratch configuration
    pub fn scratch(&self) -> &ScratchConfig {
        &self.service.scratch
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.service).map_err(CloneError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| CloneError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
