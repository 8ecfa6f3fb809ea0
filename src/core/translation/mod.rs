//! English to Hindi translation
//!
//! The seq2seq model runs in an inference sidecar; this module owns the
//! request shaping, placeholder handling and startup readiness check.

mod http;
mod passthrough;
pub mod processor;

pub use http::HttpTranslator;
pub use passthrough::PassthroughTranslator;
pub use processor::{PreparedText, TranslationProcessor};

use crate::config::{TranslationConfig, TranslationProvider};
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Translates request text into Hindi
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, failing with `TranslationFailed`
    async fn translate_to_hindi(&self, text: &str) -> Result<String>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

/// Build the configured translator
///
/// When readiness is required the sidecar is probed once here and a failure
/// aborts startup instead of surfacing on the first request.
pub async fn create_translator(config: &TranslationConfig) -> Result<Arc<dyn Translator>> {
    match config.provider {
        TranslationProvider::Http => {
            let translator = HttpTranslator::new(config)?;
            if config.require_ready {
                translator.probe().await.map_err(|e| {
                    CloneError::config(format!(
                        "Translator at {} is not ready: {}",
                        config.endpoint, e
                    ))
                })?;
            }
            info!(
                endpoint = %config.endpoint,
                src = %config.src_lang,
                tgt = %config.tgt_lang,
                "Translator initialized"
            );
            Ok(Arc::new(translator))
        }
        TranslationProvider::Passthrough => {
            warn!("Translation disabled, Hindi requests are synthesized from the input text");
            Ok(Arc::new(PassthroughTranslator))
        }
    }
}
