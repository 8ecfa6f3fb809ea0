//! Voice-cloning synthesis
//!
//! Each language family has its own isolated model environment driven as a
//! child process. The [`Synthesizer`] picks one per job and verifies that an
//! output file was actually produced.

mod subprocess;

pub use subprocess::SubprocessBackend;

use crate::config::SynthesisConfig;
use crate::core::language::LanguageTag;
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// One synthesis invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisJob {
    /// Text to speak, already translated when Hindi
    pub text: String,
    /// Resolved language tag
    pub language: LanguageTag,
    /// Local copy of the user's reference voice
    pub reference_audio: PathBuf,
    /// Where the backend must write the WAV
    pub output: PathBuf,
}

/// A model environment able to clone a voice
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Run the model; success only means the process reported success
    async fn synthesize(&self, job: &SynthesisJob) -> Result<()>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Routes jobs to the Hindi or the general backend
#[derive(Clone)]
pub struct Synthesizer {
    general: Arc<dyn SynthesisBackend>,
    hindi: Arc<dyn SynthesisBackend>,
}

impl Synthesizer {
    pub fn new(general: Arc<dyn SynthesisBackend>, hindi: Arc<dyn SynthesisBackend>) -> Self {
        Self { general, hindi }
    }

    /// Subprocess backends for both environments
    pub fn from_config(config: &SynthesisConfig) -> Self {
        info!(
            english = %config.english.interpreter.display(),
            hindi = %config.hindi.interpreter.display(),
            "Configuring synthesis backends"
        );
        Self::new(
            Arc::new(SubprocessBackend::new(config.english.clone())),
            Arc::new(SubprocessBackend::new(config.hindi.clone())),
        )
    }

    /// Backend serving a language; only Hindi has a dedicated one
    pub fn backend_for(&self, language: &LanguageTag) -> &Arc<dyn SynthesisBackend> {
        if language.is_hindi() {
            &self.hindi
        } else {
            &self.general
        }
    }

    /// Run a job and make sure its output exists
    pub async fn synthesize(&self, job: &SynthesisJob) -> Result<()> {
        // A leftover file from an earlier request must not pass the existence check
        match tokio::fs::remove_file(&job.output).await {
            Ok(()) => debug!(path = %job.output.display(), "Removed stale output"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let backend = self.backend_for(&job.language);
        debug!(backend = backend.name(), language = %job.language, "Dispatching synthesis");
        backend.synthesize(job).await?;

        if !tokio::fs::try_exists(&job.output).await.unwrap_or(false) {
            return Err(CloneError::output_missing(job.output.display().to_string()));
        }
        Ok(())
    }
}
