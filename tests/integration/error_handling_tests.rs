//! Error envelope tests

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use tts_clone_server::utils::error::CloneError;

    #[test]
    fn test_status_codes_follow_error_kind() {
        let cases = [
            (CloneError::missing_field("Missing 'text' or 'user_id'"), StatusCode::BAD_REQUEST),
            (CloneError::invalid_field("user_id"), StatusCode::BAD_REQUEST),
            (CloneError::reference_not_found("voices/x.wav"), StatusCode::NOT_FOUND),
            (CloneError::translation_failed("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (CloneError::synthesis_failed("exit 1"), StatusCode::INTERNAL_SERVER_ERROR),
            (CloneError::output_missing("out.wav"), StatusCode::INTERNAL_SERVER_ERROR),
            (CloneError::unhandled("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                CloneError::PayloadTooLarge("too big".to_string()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{}", error);
        }
    }

    #[test]
    fn test_client_errors_are_flagged() {
        assert!(CloneError::missing_field("x").is_client_error());
        assert!(CloneError::reference_not_found("x").is_client_error());
        assert!(!CloneError::synthesis_failed("x").is_client_error());
    }

    #[test]
    fn test_io_errors_are_internal() {
        let error: CloneError = std::io::Error::other("disk full").into();
        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
