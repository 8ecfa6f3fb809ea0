//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use tts_clone_server::utils::error::ErrorResponse;

/// Assert a response carries the JSON error envelope with `status` and `code`
pub async fn assert_error_envelope<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: StatusCode,
    code: &str,
) -> ErrorResponse {
    assert_eq!(resp.status(), status, "unexpected status");
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code, code, "unexpected error code: {}", body.error);
    body
}

/// Assert a response is a non-empty WAV
pub async fn assert_wav_response<B: MessageBody>(resp: ServiceResponse<B>) -> actix_web::web::Bytes {
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").map(|v| v.to_str().unwrap()),
        Some("audio/wav")
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"RIFF"), "body is not a WAV file");
    body
}
