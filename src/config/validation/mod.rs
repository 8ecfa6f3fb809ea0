//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `config_validators`: service, server, translation, synthesis, language and scratch validators
//! - `storage_validators`: voice storage validators
//! - `tests`: test suite for all validators

mod config_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
