//! Storage configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");

        if self.voice_prefix.contains("..") {
            return Err("Voice prefix cannot contain '..'".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("Max upload size must be greater than 0".to_string());
        }

        match self.backend {
            StorageBackend::S3 => self.s3.validate(),
            StorageBackend::Local => {
                if self.local_path.is_empty() {
                    return Err("Local voice store path cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

impl Validate for S3Config {
    fn validate(&self) -> Result<(), String> {
        let required = [
            ("AWS_S3_BUCKET_NAME", &self.bucket),
            ("AWS_ACCESS_KEY_ID", &self.access_key_id),
            ("AWS_SECRET_ACCESS_KEY", &self.secret_access_key),
            ("AWS_REGION", &self.region),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(format!(
                "Missing required S3 settings: {}",
                missing.join(", ")
            ));
        }

        if let Some(endpoint) = &self.endpoint {
            url::Url::parse(endpoint)
                .map_err(|e| format!("Invalid S3 endpoint '{}': {}", endpoint, e))?;
        }

        Ok(())
    }
}
