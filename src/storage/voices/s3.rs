//! Voices in Amazon S3 or an S3-compatible service

use super::VoiceStore;
use crate::config::S3Config;
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use aws_sdk_s3 as aws_s3;
use aws_s3::config::{Credentials, Region};
use aws_s3::primitives::ByteStream;
use bytes::Bytes;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Bucket-backed voice store
#[derive(Debug, Clone)]
pub struct S3VoiceStore {
    bucket: String,
    client: aws_s3::Client,
}

impl S3VoiceStore {
    /// Create a client from explicit credentials
    pub async fn new(config: &S3Config) -> Result<Self> {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "tts-clone-config",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let mut builder = aws_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        let client = aws_s3::Client::from_conf(builder.build());

        info!(
            "S3 voice storage initialized: bucket={}, region={}",
            config.bucket, config.region
        );

        Ok(Self {
            bucket: config.bucket.clone(),
            client,
        })
    }
}

#[async_trait]
impl VoiceStore for S3VoiceStore {
    async fn fetch(&self, key: &str, dest: &Path) -> Result<()> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let missing = e
                    .as_service_error()
                    .map(|se| se.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    warn!(bucket = %self.bucket, key, "Reference voice does not exist");
                } else {
                    error!(bucket = %self.bucket, key, "S3 download failed: {}", e);
                }
                CloneError::reference_not_found(key)
            })?;

        let content = object.body.collect().await.map_err(|e| {
            error!(key, "Failed to read S3 content: {}", e);
            CloneError::reference_not_found(key)
        })?;

        tokio::fs::write(dest, content.into_bytes())
            .await
            .map_err(|e| {
                error!(key, dest = %dest.display(), "Failed to write reference voice: {}", e);
                CloneError::reference_not_found(key)
            })?;

        debug!(key, dest = %dest.display(), "Reference voice downloaded");
        Ok(())
    }

    async fn store(&self, key: &str, content: Bytes) -> Result<()> {
        let size = content.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("audio/wav")
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| CloneError::storage(format!("S3 upload failed: {}", e)))?;

        debug!(key, size, "Voice uploaded to S3");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
