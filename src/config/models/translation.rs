//! Translation configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// Seq2seq model served by an inference sidecar
    #[default]
    Http,
    /// Text is forwarded untranslated
    Passthrough,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: TranslationProvider,
    /// Base URL of the inference sidecar
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,
    /// Source language/script tag
    #[serde(default = "default_src_lang")]
    pub src_lang: String,
    /// Target language/script tag
    #[serde(default = "default_tgt_lang")]
    pub tgt_lang: String,
    /// Maximum generated length in tokens
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    /// Beam search width
    #[serde(default = "default_num_beams")]
    pub num_beams: u32,
    /// Per-call timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
    /// Probe the sidecar at startup and abort if it is not ready
    #[serde(default = "default_true")]
    pub require_ready: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_translator_endpoint(),
            src_lang: default_src_lang(),
            tgt_lang: default_tgt_lang(),
            max_length: default_max_length(),
            num_beams: default_num_beams(),
            timeout_secs: default_translation_timeout(),
            require_ready: true,
        }
    }
}
