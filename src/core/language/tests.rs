//! Tests for language classification

#[cfg(test)]
mod tests {
    use super::super::*;

    /// Detector that always reports the same raw result
    struct FixedDetection(Option<&'static str>);

    impl LanguageDetection for FixedDetection {
        fn detect(&self, _text: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn classifier_with(raw: Option<&'static str>, config: &LanguageConfig) -> LanguageClassifier {
        LanguageClassifier::new(config, Arc::new(FixedDetection(raw)))
    }

    #[test]
    fn test_inconclusive_detection_defaults_to_english() {
        let classifier = classifier_with(None, &LanguageConfig::default());
        assert_eq!(classifier.classify("zzz"), LanguageTag::english());
    }

    #[test]
    fn test_detected_language_passes_through() {
        let classifier = classifier_with(Some("fr"), &LanguageConfig::default());
        assert_eq!(
            classifier.classify("Bonjour tout le monde"),
            LanguageTag::new("fr")
        );
    }

    #[test]
    fn test_placeholder_code_promoted_to_hindi() {
        let classifier = classifier_with(Some("tl"), &LanguageConfig::default());
        assert!(classifier.classify("Salamat po").is_hindi());
    }

    #[test]
    fn test_marker_words_force_hindi_regardless_of_detector() {
        let config = LanguageConfig::default();
        for raw in [Some("en"), Some("de"), Some("so"), None] {
            let classifier = classifier_with(raw, &config);
            for text in ["Tum kaisa ho", "yeh NAHI chalega", "Aur batao", "haan bilkul"] {
                assert!(
                    classifier.classify(text).is_hindi(),
                    "expected hi for {:?} with detector output {:?}",
                    text,
                    raw
                );
            }
        }
    }

    #[test]
    fn test_capitalized_marker_matches_after_lowercasing() {
        let config = LanguageConfig {
            hindi_markers: vec!["Maine".to_string()],
            ..Default::default()
        };
        let classifier = classifier_with(Some("en"), &config);
        assert_eq!(classifier.matched_marker("Maine socha"), Some("maine"));
        assert!(classifier.classify("MAINE socha").is_hindi());
    }

    #[test]
    fn test_example_request_resolves_to_hindi() {
        let classifier = classifier_with(Some("en"), &LanguageConfig::default());
        assert!(classifier.classify("Maine kya bola?").is_hindi());
    }

    #[test]
    fn test_substring_mode_false_positive_is_known_limitation() {
        // "chair" contains "hai"; substring matching accepts that trade-off
        let classifier = classifier_with(Some("en"), &LanguageConfig::default());
        assert!(classifier.classify("I have a chair").is_hindi());
    }

    #[test]
    fn test_word_mode_requires_whole_tokens() {
        let config = LanguageConfig {
            marker_match: MarkerMatch::Word,
            ..Default::default()
        };
        let classifier = classifier_with(Some("en"), &config);
        assert_eq!(classifier.classify("I have a chair"), LanguageTag::english());
        assert!(classifier.classify("Sab theek hai?").is_hindi());
    }

    #[test]
    fn test_marker_table_is_configurable() {
        let config = LanguageConfig {
            hindi_markers: vec!["accha".to_string()],
            ..Default::default()
        };
        let classifier = classifier_with(Some("en"), &config);
        assert!(classifier.classify("accha theek").is_hindi());
        assert_eq!(classifier.classify("kya"), LanguageTag::english());
    }

    #[test]
    fn test_language_tag_normalization() {
        assert_eq!(LanguageTag::new(" HI "), LanguageTag::hindi());
        assert_eq!(LanguageTag::english().to_string(), "en");
        assert!(!LanguageTag::new("en").is_hindi());
    }

    #[test]
    fn test_lingua_detects_plain_english() {
        let detection = LinguaDetection::new();
        assert_eq!(
            detection
                .detect("The weather today is sunny and warm, perfect for a long walk in the park.")
                .as_deref(),
            Some("en")
        );
        assert_eq!(detection.detect("   "), None);
    }
}
