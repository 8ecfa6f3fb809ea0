//! Voice-cloned speech synthesis endpoint

use crate::core::pipeline::SynthesisRequest;
use crate::server::state::AppState;
use crate::utils::error::CloneError;
use actix_web::{HttpResponse, web};
use tracing::info;

/// `POST /api/tts-clone`
///
/// Accepts `{"text", "user_id"}` (or the legacy `username`) and answers with
/// WAV bytes spoken in the user's voice.
pub async fn tts_clone(
    state: web::Data<AppState>,
    request: web::Json<SynthesisRequest>,
) -> Result<HttpResponse, CloneError> {
    let request = request.into_inner();
    info!(
        user_id = request.user_id.as_deref().unwrap_or_default(),
        chars = request.text.as_deref().map(|t| t.chars().count()).unwrap_or(0),
        "TTS clone request"
    );

    let output = state.clone_service.handle(request).await?;

    Ok(HttpResponse::Ok()
        .content_type("audio/wav")
        .insert_header(("x-detected-language", output.language.as_str()))
        .body(output.audio))
}
