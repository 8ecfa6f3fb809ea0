//! Core configuration validators
//!
//! Validation for every configuration section except storage.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.storage.validate()?;
        self.translation.validate()?;
        self.synthesis.validate()?;
        self.language.validate()?;
        self.scratch.validate()?;

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for TranslationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.provider == TranslationProvider::Http {
            let url = url::Url::parse(&self.endpoint)
                .map_err(|e| format!("Invalid translator endpoint '{}': {}", self.endpoint, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!(
                    "Translator endpoint must use http or https, got {}",
                    url.scheme()
                ));
            }
        }

        if self.src_lang.is_empty() || self.tgt_lang.is_empty() {
            return Err("Translation language tags cannot be empty".to_string());
        }

        if self.max_length == 0 {
            return Err("Translation max_length must be greater than 0".to_string());
        }

        if self.num_beams == 0 {
            return Err("Translation num_beams must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Translation timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for SynthesisConfig {
    fn validate(&self) -> Result<(), String> {
        self.english.validate()?;
        self.hindi.validate()
    }
}

impl Validate for SynthesisBackendConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Synthesis backend name cannot be empty".to_string());
        }

        if self.interpreter.as_os_str().is_empty() {
            return Err(format!("Synthesis backend {} has no interpreter", self.name));
        }

        if self.script.as_os_str().is_empty() {
            return Err(format!("Synthesis backend {} has no script", self.name));
        }

        if self.timeout_secs == Some(0) {
            return Err(format!(
                "Synthesis backend {} timeout must be greater than 0",
                self.name
            ));
        }

        Ok(())
    }
}

impl Validate for LanguageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.default_language.trim().is_empty() {
            return Err("Default language cannot be empty".to_string());
        }

        if self.hindi_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("Hindi marker words cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for ScratchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ref_audio_dir.is_empty() || self.output_dir.is_empty() {
            return Err("Scratch directories cannot be empty".to_string());
        }

        if self.sweep_interval_secs == 0 {
            return Err("Sweep interval must be greater than 0".to_string());
        }

        if self.max_age_secs == Some(0) {
            return Err("Scratch max age must be greater than 0".to_string());
        }

        Ok(())
    }
}
