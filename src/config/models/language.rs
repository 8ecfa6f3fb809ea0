//! Language classification configuration

use super::*;
use serde::{Deserialize, Serialize};

/// How marker words are matched against the lowercased input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMatch {
    /// Marker may appear anywhere, including inside longer words
    #[default]
    Substring,
    /// Marker must equal a whole alphanumeric token
    Word,
}

/// Language classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Tag used when detection is inconclusive
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Detected codes that are really romanized Hindi
    #[serde(default = "default_placeholder_codes")]
    pub placeholder_codes: Vec<String>,
    /// Romanized Hindi function words forcing the Hindi tag
    #[serde(default = "default_hindi_markers")]
    pub hindi_markers: Vec<String>,
    /// Marker matching mode
    #[serde(default)]
    pub marker_match: MarkerMatch,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            placeholder_codes: default_placeholder_codes(),
            hindi_markers: default_hindi_markers(),
            marker_match: MarkerMatch::default(),
        }
    }
}
