//! Reference voice retrieval

use crate::config::{StorageConfig, voice_object_key};
use crate::storage::{ScratchSpace, VoiceStore};
use crate::utils::error::Result;
use bytes::Bytes;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Moves reference voices between the store and scratch space
#[derive(Clone)]
pub struct ReferenceFetcher {
    store: Arc<dyn VoiceStore>,
    scratch: Arc<ScratchSpace>,
    voice_prefix: String,
}

impl ReferenceFetcher {
    pub fn new(store: Arc<dyn VoiceStore>, scratch: Arc<ScratchSpace>, config: &StorageConfig) -> Self {
        Self {
            store,
            scratch,
            voice_prefix: config.voice_prefix.clone(),
        }
    }

    pub fn key_for(&self, user_id: &str) -> String {
        voice_object_key(&self.voice_prefix, user_id)
    }

    /// Download `user_id`'s voice into scratch space; no retry
    pub async fn fetch(&self, user_id: &str) -> Result<PathBuf> {
        let key = self.key_for(user_id);
        let dest = self.scratch.reference_path(user_id);
        self.store.fetch(&key, &dest).await?;
        info!(user_id, key = %key, backend = self.store.backend(), "Reference voice fetched");
        Ok(dest)
    }

    /// Store a new reference voice, returning its key
    pub async fn upload(&self, user_id: &str, content: Bytes) -> Result<String> {
        let key = self.key_for(user_id);
        self.store.store(&key, content).await?;
        info!(user_id, key = %key, backend = self.store.backend(), "Reference voice stored");
        Ok(key)
    }
}
