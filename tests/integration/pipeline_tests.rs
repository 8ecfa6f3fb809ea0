//! End-to-end synthesis through the HTTP layer

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_error_envelope, assert_wav_response};
    use crate::common::{BackendBehavior, TestEnv};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::json;
    use tts_clone_server::server::HttpServer;

    fn value_after<'a>(args: &'a [String], flag: &str) -> &'a str {
        let i = args.iter().position(|a| a == flag).unwrap();
        &args[i + 1]
    }

    fn tts_request(text: &str, user_id: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/tts-clone")
            .set_json(json!({ "text": text, "user_id": user_id }))
    }

    #[actix_web::test]
    async fn test_romanized_hindi_reaches_hindi_environment() {
        let env = TestEnv::new(BackendBehavior::Succeed).await;
        env.seed_voice("alice");
        env.translate_to("मैंने क्या बोला?").await;
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        let resp = test::call_service(&app, tts_request("Maine kya bola?", "alice").to_request()).await;
        assert_eq!(resp.headers().get("x-detected-language").unwrap(), "hi");
        assert_wav_response(resp).await;

        let calls = env.calls("tts_hin");
        assert_eq!(calls.len(), 1);
        assert_eq!(value_after(&calls[0], "--language"), "hi");
        assert_eq!(value_after(&calls[0], "--text"), "मैंने क्या बोला?");
        assert!(value_after(&calls[0], "--ref_audio").ends_with("alice_ref.wav"));
        assert!(env.calls("tts_eng").is_empty());

        // Scratch files are gone once the response is built
        assert!(!env.scratch_file("ref_audio/alice_ref.wav").exists());
        assert!(!env.scratch_file("output/alice_output.wav").exists());
    }

    #[actix_web::test]
    async fn test_english_text_is_not_translated() {
        let env = TestEnv::new(BackendBehavior::Succeed).await;
        env.seed_voice("bob");
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        let resp = test::call_service(&app, tts_request("Good evening, friends", "bob").to_request()).await;
        assert_wav_response(resp).await;

        let calls = env.calls("tts_eng");
        assert_eq!(calls.len(), 1);
        assert_eq!(value_after(&calls[0], "--language"), "en");
        assert_eq!(value_after(&calls[0], "--text"), "Good evening, friends");
        assert!(env.calls("tts_hin").is_empty());
    }

    #[actix_web::test]
    async fn test_identical_requests_both_synthesize() {
        let env = TestEnv::new(BackendBehavior::Succeed).await;
        env.seed_voice("bob");
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        for _ in 0..2 {
            let resp = test::call_service(&app, tts_request("Good evening", "bob").to_request()).await;
            assert_wav_response(resp).await;
        }
        assert_eq!(env.calls("tts_eng").len(), 2);
    }

    #[actix_web::test]
    async fn test_failed_exit_wins_over_written_output() {
        let env = TestEnv::new(BackendBehavior::FailAfterWriting).await;
        env.seed_voice("carol");
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        let resp = test::call_service(&app, tts_request("Good evening", "carol").to_request()).await;
        assert_error_envelope(resp, StatusCode::INTERNAL_SERVER_ERROR, "SYNTHESIS_FAILED").await;
    }

    #[actix_web::test]
    async fn test_missing_reference_never_spawns() {
        let env = TestEnv::new(BackendBehavior::Succeed).await;
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        let resp = test::call_service(&app, tts_request("Good evening", "nobody").to_request()).await;
        let body =
            assert_error_envelope(resp, StatusCode::NOT_FOUND, "REFERENCE_NOT_FOUND").await;
        assert_eq!(body.error, "Reference audio not found: voices/nobody.wav");
        assert!(env.calls("tts_eng").is_empty());
    }

    #[actix_web::test]
    async fn test_translation_failure_is_500() {
        let env = TestEnv::new(BackendBehavior::Succeed).await;
        env.seed_voice("dave");
        // No /translate mock mounted: the sidecar answers 404
        let app = test::init_service(HttpServer::create_app(env.app_state().await)).await;

        let resp = test::call_service(&app, tts_request("tum kaisa ho", "dave").to_request()).await;
        assert_error_envelope(resp, StatusCode::INTERNAL_SERVER_ERROR, "TRANSLATION_FAILED")
            .await;
        assert!(env.calls("tts_hin").is_empty());
    }
}
