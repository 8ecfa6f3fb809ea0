//! HTTP route modules

pub mod health;
pub mod tts;
pub mod voices;

use actix_web::web;

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/tts-clone", web::post().to(tts::tts_clone))
                .route("/upload-voice", web::post().to(voices::upload_voice)),
        );
}
