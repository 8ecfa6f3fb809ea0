//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::language::{LanguageClassifier, LinguaDetection};
use crate::core::pipeline::CloneService;
use crate::core::reference::ReferenceFetcher;
use crate::core::synthesis::Synthesizer;
use crate::core::translation::create_translator;
use crate::server::middleware::{RequestIdMiddleware, RequestIdRootSpan};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::{ScratchSpace, create_voice_store};
use crate::utils::error::{CloneError, Result};
use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
    /// Scratch space, kept for the sweeper
    scratch: Arc<ScratchSpace>,
}

impl HttpServer {
    /// Create a new HTTP server, initializing every dependency
    ///
    /// Scratch directories, voice storage and the translator are all set up
    /// here so that a broken deployment fails before binding.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let scratch = Arc::new(ScratchSpace::prepare(config.scratch()).await?);
        let voice_store = create_voice_store(config.storage()).await?;
        let translator = create_translator(config.translation()).await?;

        info!("Loading language detection models");
        let detection = Arc::new(LinguaDetection::new());
        let classifier = Arc::new(LanguageClassifier::new(config.language(), detection));

        let service = CloneService::new(
            classifier,
            translator,
            ReferenceFetcher::new(voice_store, scratch.clone(), config.storage()),
            Synthesizer::from_config(config.synthesis()),
            scratch.clone(),
            config.scratch().retention,
        );

        Ok(Self {
            config: config.server().clone(),
            state: AppState::new(config.clone(), service),
            scratch,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config.server();
        let cors_config = &server_config.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
                cors_config.validate().unwrap_or_else(|e| {
                    warn!(error = %e, "CORS Configuration Warning");
                });
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            let methods: Vec<actix_web::http::Method> = cors_config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse().ok())
                .collect();
            if !methods.is_empty() {
                cors = cors.allowed_methods(methods);
            }

            let headers: Vec<actix_web::http::header::HeaderName> = cors_config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok())
                .collect();
            if !headers.is_empty() {
                cors = cors.allowed_headers(headers);
            }

            cors = cors.max_age(cors_config.max_age as usize);

            if cors_config.allow_credentials {
                cors = cors.supports_credentials();
            }
        }

        // The body is JSON whatever the client labels it
        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .content_type(|_| true)
            .content_type_required(false)
            .error_handler(|err, _req| {
                let error = match err {
                    JsonPayloadError::Overflow { .. }
                    | JsonPayloadError::OverflowKnownLength { .. } => {
                        CloneError::PayloadTooLarge(err.to_string())
                    }
                    other => CloneError::bad_request(other.to_string()),
                };
                error.into()
            });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(TracingLogger::<RequestIdRootSpan>::new())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "tts-clone-server")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        let scratch_config = self.state.config.scratch().clone();
        if let Some(max_age) = scratch_config.max_age_secs {
            info!(
                max_age_secs = max_age,
                interval_secs = scratch_config.sweep_interval_secs,
                "Starting scratch sweeper"
            );
            self.scratch.clone().spawn_sweeper(
                Duration::from_secs(max_age),
                Duration::from_secs(scratch_config.sweep_interval_secs),
            );
        }

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| CloneError::unhandled(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
