//! Request pipeline for voice-cloned synthesis
//!
//! `Received → Validated → LanguageClassified → [Translated] →
//! ReferenceFetched → Synthesized → Responded`, with every stage able to
//! fail into an error response.

mod locks;

use crate::config::RetentionPolicy;
use crate::core::language::{LanguageClassifier, LanguageTag};
use crate::core::reference::ReferenceFetcher;
use crate::core::synthesis::{SynthesisJob, Synthesizer};
use crate::core::translation::Translator;
use crate::storage::ScratchSpace;
use crate::utils::error::{CloneError, Result};
use crate::utils::truncate_string;
use bytes::Bytes;
use futures::FutureExt;
use locks::UserLocks;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Message returned when either required field is absent
pub const MISSING_FIELDS_MESSAGE: &str = "Missing 'text' or 'user_id'";

/// Longest accepted user id
pub const MAX_USER_ID_BYTES: usize = 128;

/// Pipeline stages, as they appear in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Validated,
    LanguageClassified,
    Translated,
    ReferenceFetched,
    Synthesized,
    Responded,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::LanguageClassified => "language_classified",
            Self::Translated => "translated",
            Self::ReferenceFetched => "reference_fetched",
            Self::Synthesized => "synthesized",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesis request as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "username")]
    pub user_id: Option<String>,
}

/// Successful synthesis
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// WAV bytes
    pub audio: Bytes,
    /// Resolved language
    pub language: LanguageTag,
    /// Text handed to the synthesizer, translated when Hindi
    pub spoken_text: String,
}

/// Check a user id before it becomes part of a key or a file name
pub fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.len() > MAX_USER_ID_BYTES {
        return Err(CloneError::invalid_field(format!(
            "user_id must be at most {} bytes",
            MAX_USER_ID_BYTES
        )));
    }
    if user_id == "."
        || user_id.contains("..")
        || user_id.contains(['/', '\\'])
        || user_id.chars().any(char::is_control)
    {
        return Err(CloneError::invalid_field(
            "user_id contains path separators or control characters",
        ));
    }
    Ok(())
}

/// Runs the whole pipeline for one request
pub struct CloneService {
    classifier: Arc<LanguageClassifier>,
    translator: Arc<dyn Translator>,
    references: ReferenceFetcher,
    synthesizer: Synthesizer,
    scratch: Arc<ScratchSpace>,
    retention: RetentionPolicy,
    locks: UserLocks,
}

impl CloneService {
    pub fn new(
        classifier: Arc<LanguageClassifier>,
        translator: Arc<dyn Translator>,
        references: ReferenceFetcher,
        synthesizer: Synthesizer,
        scratch: Arc<ScratchSpace>,
        retention: RetentionPolicy,
    ) -> Self {
        Self {
            classifier,
            translator,
            references,
            synthesizer,
            scratch,
            retention,
            locks: UserLocks::new(),
        }
    }

    pub fn references(&self) -> &ReferenceFetcher {
        &self.references
    }

    /// Handle one request; panics inside the pipeline become `Unhandled`
    pub async fn handle(&self, request: SynthesisRequest) -> Result<SynthesisOutput> {
        let started = Instant::now();
        debug!(stage = %PipelineStage::Received, "Synthesis request received");

        let (text, user_id) = Self::validate(request)?;
        debug!(stage = %PipelineStage::Validated, user_id = %user_id, "Request validated");

        // Scratch names derive from user_id alone
        let _guard = self.locks.lock(&user_id).await;

        let reference = self.scratch.reference_path(&user_id);
        let output = self.scratch.output_path(&user_id);

        let result = match AssertUnwindSafe(self.synthesize_for(&user_id, text))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "synthesis pipeline panicked".to_string());
                error!(user_id = %user_id, "Pipeline panicked: {}", message);
                Err(CloneError::unhandled(message))
            }
        };

        if self.retention == RetentionPolicy::DeleteAfterResponse {
            self.scratch.discard(&[&reference, &output]).await;
        }

        match &result {
            Ok(out) => info!(
                stage = %PipelineStage::Responded,
                user_id = %user_id,
                language = %out.language,
                bytes = out.audio.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Synthesis request completed"
            ),
            Err(e) => error!(user_id = %user_id, code = e.code(), "Synthesis request failed: {}", e),
        }
        result
    }

    async fn synthesize_for(&self, user_id: &str, text: String) -> Result<SynthesisOutput> {
        let language = self.classifier.classify(&text);
        debug!(user_id, text = %truncate_string(&text, 80), "Classifying request text");
        info!(
            stage = %PipelineStage::LanguageClassified,
            user_id,
            language = %language,
            "Language classified"
        );

        let spoken_text = if language.is_hindi() {
            let translated = self.translator.translate_to_hindi(&text).await?;
            info!(
                stage = %PipelineStage::Translated,
                user_id,
                translator = self.translator.name(),
                "Text translated"
            );
            translated
        } else {
            text
        };

        let reference_audio = self.references.fetch(user_id).await?;
        debug!(stage = %PipelineStage::ReferenceFetched, user_id, "Reference ready");

        let job = SynthesisJob {
            text: spoken_text,
            language,
            reference_audio,
            output: self.scratch.output_path(user_id),
        };
        self.synthesizer.synthesize(&job).await?;

        let audio = Bytes::from(tokio::fs::read(&job.output).await?);
        info!(
            stage = %PipelineStage::Synthesized,
            user_id,
            language = %job.language,
            "Audio synthesized"
        );

        Ok(SynthesisOutput {
            audio,
            language: job.language,
            spoken_text: job.text,
        })
    }

    fn validate(request: SynthesisRequest) -> Result<(String, String)> {
        let text = request.text.filter(|t| !t.trim().is_empty());
        let user_id = request
            .user_id
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        match (text, user_id) {
            (Some(text), Some(user_id)) => {
                validate_user_id(&user_id)?;
                Ok((text, user_id))
            }
            _ => Err(CloneError::missing_field(MISSING_FIELDS_MESSAGE)),
        }
    }
}
