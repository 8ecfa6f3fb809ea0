//! Integration tests for tts-clone-server
//!
//! These tests run whole requests through the HTTP layer with real storage,
//! real child processes and a mock translation sidecar.

pub mod config_tests;
pub mod error_handling_tests;
#[cfg(unix)]
pub mod pipeline_tests;
