//! Top-level service configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{CloneError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Voice storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Translation configuration
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Synthesis backend configuration
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    /// Language classification configuration
    #[serde(default)]
    pub language: LanguageConfig,
    /// Scratch directory configuration
    #[serde(default)]
    pub scratch: ScratchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable source
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        // Server configuration
        if let Some(host) = lookup("TTS_CLONE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TTS_CLONE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| CloneError::config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("TTS_CLONE_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| CloneError::config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Some(origins) = lookup("TTS_CLONE_CORS_ORIGINS") {
            self.server.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        // Storage configuration
        if let Some(backend) = lookup("TTS_CLONE_STORAGE_BACKEND") {
            self.storage.backend = backend.parse().map_err(CloneError::Config)?;
        }
        if let Some(path) = lookup("TTS_CLONE_LOCAL_VOICES_DIR") {
            self.storage.local_path = path;
        }
        if let Some(bucket) = lookup("AWS_S3_BUCKET_NAME") {
            self.storage.s3.bucket = bucket;
        }
        if let Some(key) = lookup("AWS_ACCESS_KEY_ID") {
            self.storage.s3.access_key_id = key;
        }
        if let Some(secret) = lookup("AWS_SECRET_ACCESS_KEY") {
            self.storage.s3.secret_access_key = secret;
        }
        if let Some(region) = lookup("AWS_REGION") {
            self.storage.s3.region = region;
        }
        if let Some(endpoint) = lookup("AWS_ENDPOINT_URL") {
            self.storage.s3.endpoint = Some(endpoint);
        }

        // Translation configuration
        if let Some(endpoint) = lookup("TRANSLATOR_ENDPOINT") {
            self.translation.endpoint = endpoint;
        }

        // Logging configuration
        if let Some(level) = lookup("TTS_CLONE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("TTS_CLONE_LOG_JSON") {
            self.logging.json = json
                .parse()
                .map_err(|e| CloneError::config(format!("Invalid log json flag: {}", e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_aws_variables_fill_s3_config() {
        let mut config = ServiceConfig::default();
        config
            .apply_env_from(lookup_from(&[
                ("AWS_S3_BUCKET_NAME", "voices-bucket"),
                ("AWS_ACCESS_KEY_ID", "AKIA123"),
                ("AWS_SECRET_ACCESS_KEY", "secret"),
                ("AWS_REGION", "ap-south-1"),
            ]))
            .unwrap();

        assert_eq!(config.storage.s3.bucket, "voices-bucket");
        assert_eq!(config.storage.s3.access_key_id, "AKIA123");
        assert_eq!(config.storage.s3.secret_access_key, "secret");
        assert_eq!(config.storage.s3.region, "ap-south-1");
    }

    #[test]
    fn test_server_overrides() {
        let mut config = ServiceConfig::default();
        config
            .apply_env_from(lookup_from(&[
                ("TTS_CLONE_PORT", "9000"),
                (
                    "TTS_CLONE_CORS_ORIGINS",
                    "http://localhost:3000, https://app.example.com",
                ),
                ("TTS_CLONE_STORAGE_BACKEND", "local"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.server.cors.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert_eq!(config.storage.backend, StorageBackend::Local);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = ServiceConfig::default();
        let result = config.apply_env_from(lookup_from(&[("TTS_CLONE_PORT", "eighty")]));
        assert!(matches!(result, Err(CloneError::Config(_))));
    }

    #[test]
    fn test_unknown_storage_backend_is_rejected() {
        let mut config = ServiceConfig::default();
        let result =
            config.apply_env_from(lookup_from(&[("TTS_CLONE_STORAGE_BACKEND", "ftp")]));
        assert!(matches!(result, Err(CloneError::Config(_))));
    }
}
