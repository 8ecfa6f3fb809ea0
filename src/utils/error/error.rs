//! Error handling for the clone server
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the clone server
pub type Result<T> = std::result::Result<T, CloneError>;

/// Main error type for the clone server
#[derive(Error, Debug)]
pub enum CloneError {
    /// A required request field is absent or empty
    #[error("{0}")]
    MissingField(String),

    /// A request field is present but unusable
    #[error("{0}")]
    InvalidField(String),

    /// Malformed request body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeds the accepted size
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The user's reference voice could not be retrieved
    #[error("Reference audio not found: {0}")]
    ReferenceNotFound(String),

    /// Translation to Hindi failed
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    /// The synthesis process exited unsuccessfully
    #[error("Voice synthesis failed: {0}")]
    SynthesisFailed(String),

    /// The synthesis process succeeded but produced no audio file
    #[error("Output not generated: {0}")]
    OutputMissing(String),

    /// Object storage errors outside the reference fetch path
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything the pipeline did not anticipate
    #[error("{0}")]
    Unhandled(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl CloneError {
    /// Stable machine-readable code for the error envelope
    pub fn code(&self) -> &'static str {
        match self {
            CloneError::MissingField(_) => "MISSING_FIELD",
            CloneError::InvalidField(_) => "INVALID_FIELD",
            CloneError::BadRequest(_) => "BAD_REQUEST",
            CloneError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            CloneError::ReferenceNotFound(_) => "REFERENCE_NOT_FOUND",
            CloneError::TranslationFailed(_) => "TRANSLATION_FAILED",
            CloneError::SynthesisFailed(_) => "SYNTHESIS_FAILED",
            CloneError::OutputMissing(_) => "OUTPUT_MISSING",
            CloneError::Storage(_) => "STORAGE_ERROR",
            CloneError::Config(_) => "CONFIG_ERROR",
            CloneError::Unhandled(_)
            | CloneError::Io(_)
            | CloneError::Serialization(_)
            | CloneError::Yaml(_)
            | CloneError::HttpClient(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error was caused by the client rather than the service
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for CloneError {
    fn status_code(&self) -> StatusCode {
        match self {
            CloneError::MissingField(_)
            | CloneError::InvalidField(_)
            | CloneError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CloneError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            CloneError::ReferenceNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Helper functions for creating specific errors
impl CloneError {
    pub fn missing_field<S: Into<String>>(message: S) -> Self {
        Self::MissingField(message.into())
    }

    pub fn invalid_field<S: Into<String>>(message: S) -> Self {
        Self::InvalidField(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn reference_not_found<S: Into<String>>(message: S) -> Self {
        Self::ReferenceNotFound(message.into())
    }

    pub fn translation_failed<S: Into<String>>(message: S) -> Self {
        Self::TranslationFailed(message.into())
    }

    pub fn synthesis_failed<S: Into<String>>(message: S) -> Self {
        Self::SynthesisFailed(message.into())
    }

    pub fn output_missing<S: Into<String>>(message: S) -> Self {
        Self::OutputMissing(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unhandled<S: Into<String>>(message: S) -> Self {
        Self::Unhandled(message.into())
    }
}
