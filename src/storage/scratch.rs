//! Per-request scratch files
//!
//! Reference downloads and synthesized output use deterministic
//! `{user_id}_ref.wav` and `{user_id}_output.wav` names, so callers must
//! serialize requests for the same user.

use crate::config::ScratchConfig;
use crate::utils::error::{CloneError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::fs;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Scratch directories for reference and output audio
#[derive(Debug, Clone)]
pub struct ScratchSpace {
    ref_dir: PathBuf,
    output_dir: PathBuf,
}

impl ScratchSpace {
    /// Create both directories
    ///
    /// Paths are made absolute so child processes running in another
    /// working directory still find them.
    pub async fn prepare(config: &ScratchConfig) -> Result<Self> {
        let space = Self {
            ref_dir: create_absolute(&config.ref_audio_dir).await?,
            output_dir: create_absolute(&config.output_dir).await?,
        };

        info!(
            ref_dir = %space.ref_dir.display(),
            output_dir = %space.output_dir.display(),
            "Scratch directories ready"
        );
        Ok(space)
    }

    pub fn reference_path(&self, user_id: &str) -> PathBuf {
        self.ref_dir.join(format!("{}_ref.wav", user_id))
    }

    pub fn output_path(&self, user_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}_output.wav", user_id))
    }

    /// Best-effort removal of request files
    pub async fn discard<P: AsRef<Path>>(&self, paths: &[P]) {
        for path in paths {
            let path = path.as_ref();
            match fs::remove_file(path).await {
                Ok(()) => debug!(path = %path.display(), "Scratch file removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), "Failed to remove scratch file: {}", e),
            }
        }
    }

    /// Delete scratch files last modified more than `max_age` ago
    pub async fn sweep(&self, max_age: Duration) -> Result<usize> {
        let now = SystemTime::now();
        let mut removed = 0;

        for dir in [&self.ref_dir, &self.output_dir] {
            let mut entries = fs::read_dir(dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let metadata = match entry.metadata().await {
                    Ok(m) if m.is_file() => m,
                    _ => continue,
                };
                let expired = metadata
                    .modified()
                    .ok()
                    .and_then(|modified| now.duration_since(modified).ok())
                    .is_some_and(|age| age > max_age);
                if expired && fs::remove_file(entry.path()).await.is_ok() {
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            info!(removed, "Swept expired scratch files");
        }
        Ok(removed)
    }

    /// Run [`sweep`](Self::sweep) every `interval` until the runtime shuts down
    pub fn spawn_sweeper(self: Arc<Self>, max_age: Duration, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = self.sweep(max_age).await {
                    warn!("Scratch sweep failed: {}", e);
                }
            }
        })
    }
}

async fn create_absolute(dir: &str) -> Result<PathBuf> {
    let failed = |e: std::io::Error| {
        CloneError::config(format!("Failed to create scratch directory {}: {}", dir, e))
    };
    fs::create_dir_all(dir).await.map_err(failed)?;
    std::path::absolute(dir).map_err(failed)
}
