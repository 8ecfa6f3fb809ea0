//! Reference voice storage
//!
//! Voices live under `{voice_prefix}/{user_id}.wav` in a bucket, or in a
//! local directory with the same layout.

mod local;
#[cfg(feature = "s3")]
mod s3;
mod tests;

pub use local::LocalVoiceStore;
#[cfg(feature = "s3")]
pub use s3::S3VoiceStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Object store holding reference voices
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoiceStore: Send + Sync {
    /// Copy the object at `key` to `dest`
    ///
    /// Every failure, not only a missing key, is reported as
    /// `ReferenceNotFound`.
    async fn fetch(&self, key: &str, dest: &Path) -> Result<()>;

    /// Store a WAV under `key`, replacing any previous one
    async fn store(&self, key: &str, content: Bytes) -> Result<()>;

    /// Backend name for logs
    fn backend(&self) -> &'static str;
}

/// Build the configured voice store
pub async fn create_voice_store(config: &StorageConfig) -> Result<Arc<dyn VoiceStore>> {
    info!("Initializing voice storage: {}", config.backend);

    match config.backend {
        StorageBackend::Local => Ok(Arc::new(LocalVoiceStore::new(&config.local_path).await?)),
        #[cfg(feature = "s3")]
        StorageBackend::S3 => Ok(Arc::new(S3VoiceStore::new(&config.s3).await?)),
        #[cfg(not(feature = "s3"))]
        StorageBackend::S3 => Err(CloneError::config(
            "S3 voice storage requires the `s3` feature",
        )),
    }
}

/// Reject keys that could escape the store root
pub(crate) fn check_key(key: &str) -> Result<()> {
    let escapes = key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|part| part.is_empty() || part == "..");
    if escapes {
        return Err(CloneError::invalid_field(format!("Invalid voice key: {}", key)));
    }
    Ok(())
}
