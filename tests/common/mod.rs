//! Common test utilities for tts-clone-server

pub mod assertions;
pub mod fixtures;

pub use fixtures::{BackendBehavior, TestEnv, wav_bytes};
