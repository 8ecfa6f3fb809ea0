//! Reference voice upload endpoint

use crate::core::pipeline::{MAX_USER_ID_BYTES, validate_user_id};
use crate::server::state::AppState;
use crate::utils::error::CloneError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde::Serialize;
use std::io::Cursor;
use tracing::{error, info, warn};

const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["audio/wav", "audio/x-wav", "audio/wave"];

/// Message returned when either form part is absent
pub const MISSING_UPLOAD_MESSAGE: &str = "Missing file or username";

/// Successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub key: String,
    pub username: String,
    pub duration_secs: f64,
}

/// `POST /api/upload-voice`
///
/// Multipart form with a `voice` WAV file and a `username` (or `user_id`)
/// field. Replaces any previous voice of that user.
pub async fn upload_voice(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, CloneError> {
    let limit = state.config.storage().max_upload_bytes;
    let mut voice: Option<Bytes> = None;
    let mut username: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            error!("Error reading multipart field: {}", e);
            CloneError::bad_request(format!("Invalid multipart data: {}", e))
        })?;

        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match name.as_str() {
            "voice" => {
                let content_type = field
                    .content_type()
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_default();
                if !ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()) {
                    warn!(content_type = %content_type, "Rejected voice upload");
                    return Err(CloneError::bad_request("Only WAV audio is accepted"));
                }

                let mut data = BytesMut::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| {
                        CloneError::bad_request(format!("Error reading file: {}", e))
                    })?;
                    if data.len() + chunk.len() > limit {
                        return Err(CloneError::PayloadTooLarge(format!(
                            "voice file exceeds {} bytes",
                            limit
                        )));
                    }
                    data.extend_from_slice(&chunk);
                }
                voice = Some(data.freeze());
            }
            "username" | "user_id" => {
                let mut data = BytesMut::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| {
                        CloneError::bad_request(format!("Error reading field: {}", e))
                    })?;
                    if data.len() + chunk.len() > MAX_USER_ID_BYTES {
                        return Err(CloneError::invalid_field(format!(
                            "username exceeds {} bytes",
                            MAX_USER_ID_BYTES
                        )));
                    }
                    data.extend_from_slice(&chunk);
                }
                let value = String::from_utf8_lossy(&data).trim().to_string();
                if !value.is_empty() {
                    username = Some(value);
                }
            }
            _ => {
                // Skip unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let (voice, username) = match (voice.filter(|v| !v.is_empty()), username) {
        (Some(voice), Some(username)) => (voice, username),
        _ => return Err(CloneError::missing_field(MISSING_UPLOAD_MESSAGE)),
    };
    validate_user_id(&username)?;

    let duration_secs = wav_duration(&voice)?;
    let key = state
        .clone_service
        .references()
        .upload(&username, voice)
        .await?;

    info!(username = %username, key = %key, duration_secs, "Voice uploaded");
    Ok(HttpResponse::Ok().json(UploadResponse {
        message: "Voice uploaded successfully",
        key,
        username,
        duration_secs,
    }))
}

/// Parse the WAV header and return the clip length in seconds
fn wav_duration(data: &[u8]) -> Result<f64, CloneError> {
    let reader = hound::WavReader::new(Cursor::new(data)).map_err(|e| {
        warn!("Uploaded voice is not a valid WAV: {}", e);
        CloneError::bad_request(format!("Invalid WAV file: {}", e))
    })?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(CloneError::bad_request("Invalid WAV file: zero sample rate"));
    }
    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}
