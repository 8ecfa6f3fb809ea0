//! Pre- and post-processing around the seq2seq model
//!
//! URLs, e-mail addresses and numerals are swapped for `<ID{n}>` placeholders
//! before generation so the model cannot mangle them, then restored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PROTECTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?:https?://|www\.)\S+            # urls
        | [\w.+-]+@[\w-]+(?:\.[\w-]+)+    # e-mail addresses
        | \d+(?:[.,:/]\d+)*               # numerals
        ",
    )
    .expect("protected entity pattern is valid")
});

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*ID\s*(\d+)\s*>").expect("placeholder pattern is valid"));

/// Text ready for the model plus what it needs to be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    /// Sentence prefixed with source and target tags
    pub tagged: String,
    /// Protected spans, `placeholders[n - 1]` replaces `<IDn>`
    pub placeholders: Vec<String>,
}

/// Language-tagging processor for one translation direction
#[derive(Debug, Clone)]
pub struct TranslationProcessor {
    src_lang: String,
    tgt_lang: String,
}

impl TranslationProcessor {
    pub fn new(src_lang: impl Into<String>, tgt_lang: impl Into<String>) -> Self {
        Self {
            src_lang: src_lang.into(),
            tgt_lang: tgt_lang.into(),
        }
    }

    pub fn src_lang(&self) -> &str {
        &self.src_lang
    }

    pub fn tgt_lang(&self) -> &str {
        &self.tgt_lang
    }

    /// Normalize, protect entities and tag the sentence
    pub fn preprocess(&self, text: &str) -> PreparedText {
        let normalized = collapse_whitespace(text);
        let mut placeholders = Vec::new();

        let protected = PROTECTED.replace_all(&normalized, |caps: &Captures| {
            placeholders.push(caps[0].to_string());
            format!("<ID{}>", placeholders.len())
        });

        PreparedText {
            tagged: format!("{} {} {}", self.src_lang, self.tgt_lang, protected),
            placeholders,
        }
    }

    /// Restore protected spans and tidy the model output
    pub fn postprocess(&self, output: &str, prepared: &PreparedText) -> String {
        let restored = PLACEHOLDER.replace_all(output, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| prepared.placeholders.get(i))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        });

        collapse_whitespace(&restored)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
