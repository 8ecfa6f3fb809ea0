//! Storage layer for the clone server
//!
//! Reference voices live in an object store; per-request audio lives in
//! local scratch directories.

/// Per-request scratch files
pub mod scratch;
/// Reference voice storage
pub mod voices;

pub use scratch::ScratchSpace;
pub use voices::{LocalVoiceStore, VoiceStore, create_voice_store};
#[cfg(feature = "s3")]
pub use voices::S3VoiceStore;
