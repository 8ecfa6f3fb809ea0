//! # tts-clone-server
//!
//! HTTP front-end for voice-cloned text-to-speech.
//!
//! A request carries text and a user id. The service works out the language
//! (promoting romanized Hindi to `hi`), translates Hindi requests into
//! Devanagari, pulls the user's reference voice from object storage and runs
//! the matching voice-cloning model in its own environment. The response is
//! the synthesized WAV.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use tts_clone_server::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/tts-clone.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::language::{LanguageClassifier, LanguageTag};
pub use core::pipeline::{CloneService, SynthesisOutput, SynthesisRequest};
pub use core::translation::Translator;
pub use utils::error::{CloneError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
