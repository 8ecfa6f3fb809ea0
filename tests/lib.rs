//! Test suite for tts-clone-server
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared test infrastructure:
//! - A scratch environment with a local voice store
//! - Shell scripts standing in for the model environments
//! - A mock translation sidecar
//! - Custom assertions
//!
//! ### 2. Integration Tests (`integration/`)
//! Full requests through the HTTP layer, pipeline, storage and child
//! processes.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run everything
//! cargo test
//!
//! # Run only integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
