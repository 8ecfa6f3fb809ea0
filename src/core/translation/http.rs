//! Client for the translation inference sidecar

use super::Translator;
use super::processor::TranslationProcessor;
use crate::config::TranslationConfig;
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    sentences: Vec<String>,
    src_lang: &'a str,
    tgt_lang: &'a str,
    max_length: u32,
    num_beams: u32,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<String>,
}

/// Translator backed by `POST {endpoint}/translate`
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    processor: TranslationProcessor,
    max_length: u32,
    num_beams: u32,
}

impl HttpTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CloneError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            processor: TranslationProcessor::new(&config.src_lang, &config.tgt_lang),
            max_length: config.max_length,
            num_beams: config.num_beams,
        })
    }

    /// Check that the sidecar has its model loaded
    pub async fn probe(&self) -> Result<()> {
        let url = format!("{}/health", self.endpoint);
        self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        debug!(url = %url, "Translator sidecar is ready");
        Ok(())
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate_to_hindi(&self, text: &str) -> Result<String> {
        let prepared = self.processor.preprocess(text);
        let body = TranslateRequest {
            sentences: vec![prepared.tagged.clone()],
            src_lang: self.processor.src_lang(),
            tgt_lang: self.processor.tgt_lang(),
            max_length: self.max_length,
            num_beams: self.num_beams,
        };

        let url = format!("{}/translate", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, "Translator request failed: {}", e);
                CloneError::translation_failed(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, "Translator returned an error: {}", detail);
            return Err(CloneError::translation_failed(format!(
                "sidecar returned {}",
                status
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            CloneError::translation_failed(format!("invalid sidecar response: {}", e))
        })?;

        let output = parsed
            .translations
            .into_iter()
            .next()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CloneError::translation_failed("empty translation"))?;

        Ok(self.processor.postprocess(&output, &prepared))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
