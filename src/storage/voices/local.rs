//! Voices in a local directory

use super::{VoiceStore, check_key};
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Directory laid out like the bucket
#[derive(Debug, Clone)]
pub struct LocalVoiceStore {
    base_path: PathBuf,
}

impl LocalVoiceStore {
    /// Open the store, creating the root directory if needed
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&path).await.map_err(|e| {
            CloneError::storage(format!("Failed to create voice directory: {}", e))
        })?;

        info!("Local voice storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl VoiceStore for LocalVoiceStore {
    async fn fetch(&self, key: &str, dest: &Path) -> Result<()> {
        check_key(key).map_err(|_| CloneError::reference_not_found(key))?;
        let source = self.object_path(key);

        fs::copy(&source, dest).await.map_err(|e| {
            warn!(key, "Failed to read reference voice: {}", e);
            CloneError::reference_not_found(key)
        })?;

        debug!(key, dest = %dest.display(), "Reference voice copied");
        Ok(())
    }

    async fn store(&self, key: &str, content: Bytes) -> Result<()> {
        check_key(key)?;
        let target = self.object_path(key);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                CloneError::storage(format!("Failed to create directory: {}", e))
            })?;
        }

        // Write beside the target and rename so readers never see a partial file
        let partial = target.with_extension(format!("{}.part", Uuid::new_v4().simple()));
        fs::write(&partial, &content)
            .await
            .map_err(|e| CloneError::storage(format!("Failed to write voice: {}", e)))?;
        if let Err(e) = fs::rename(&partial, &target).await {
            let _ = fs::remove_file(&partial).await;
            return Err(CloneError::storage(format!("Failed to store voice: {}", e)));
        }

        debug!(key, size = content.len(), "Voice stored locally");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
