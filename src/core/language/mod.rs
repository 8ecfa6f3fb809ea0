//! Language classification
//!
//! Statistical detection followed by a romanized-Hindi override table.

mod tests;

use crate::config::{LanguageConfig, MarkerMatch};
use lingua::{LanguageDetector, LanguageDetectorBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Lowercase ISO-639-1 language code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag, normalizing case and whitespace
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    /// The Hindi tag
    pub fn hindi() -> Self {
        Self("hi".to_string())
    }

    /// The English tag
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_hindi(&self) -> bool {
        self.0 == "hi"
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw statistical language detection
pub trait LanguageDetection: Send + Sync {
    /// Detected ISO-639-1 code, or `None` when inconclusive
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detection backed by the `lingua` n-gram models
pub struct LinguaDetection {
    detector: LanguageDetector,
}

impl LinguaDetection {
    /// Build a detector over every language lingua ships
    pub fn new() -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetection for LinguaDetection {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.detector
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string())
    }
}

/// Resolves the language tag of request text
pub struct LanguageClassifier {
    detection: Arc<dyn LanguageDetection>,
    default_language: LanguageTag,
    placeholder_codes: HashSet<LanguageTag>,
    markers: Vec<String>,
    marker_match: MarkerMatch,
}

impl LanguageClassifier {
    /// Create a classifier from configuration
    pub fn new(config: &LanguageConfig, detection: Arc<dyn LanguageDetection>) -> Self {
        Self {
            detection,
            default_language: LanguageTag::new(&config.default_language),
            placeholder_codes: config.placeholder_codes.iter().map(LanguageTag::new).collect(),
            // Markers are matched against lowercased text, so store them lowercased
            markers: config
                .hindi_markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
            marker_match: config.marker_match,
        }
    }

    /// Classify text; never fails
    pub fn classify(&self, text: &str) -> LanguageTag {
        let detected = self
            .detection
            .detect(text)
            .map(LanguageTag::new)
            .unwrap_or_else(|| self.default_language.clone());

        if self.placeholder_codes.contains(&detected) {
            debug!(detected = %detected, "Placeholder code promoted to Hindi");
            return LanguageTag::hindi();
        }

        if let Some(marker) = self.matched_marker(text) {
            debug!(detected = %detected, marker, "Romanized Hindi marker found");
            return LanguageTag::hindi();
        }

        detected
    }

    /// First configured marker present in the text
    pub fn matched_marker(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        match self.marker_match {
            MarkerMatch::Substring => self
                .markers
                .iter()
                .find(|marker| lowered.contains(marker.as_str()))
                .map(String::as_str),
            MarkerMatch::Word => {
                let words: HashSet<&str> = lowered
                    .split(|c: char| !c.is_alphanumeric())
                    .filter(|w| !w.is_empty())
                    .collect();
                self.markers
                    .iter()
                    .find(|marker| words.contains(marker.as_str()))
                    .map(String::as_str)
            }
        }
    }
}
