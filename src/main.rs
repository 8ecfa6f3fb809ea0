//! tts-clone-server - voice-cloned text-to-speech over HTTP

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tts_clone_server::config::{Config, DEFAULT_CONFIG_PATH};
use tts_clone_server::utils::logging::init_tracing;
use tts_clone_server::{build_info, server};

/// Voice-cloned text-to-speech server
#[derive(Debug, Parser)]
#[command(name = "tts-clone-server", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "TTS_CLONE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside development
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.apply_overrides(args.host, args.port) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let build = build_info();
    info!(version = build.version, git = build.git_hash, "tts-clone-server");

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
