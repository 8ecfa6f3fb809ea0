//! Server startup

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build every dependency from `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting TTS clone server");

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/tts-clone - Voice-cloned speech synthesis");
    info!("   POST /api/upload-voice - Reference voice upload");

    server.start().await
}
