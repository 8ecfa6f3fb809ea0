//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod language;
pub mod logging;
pub mod scratch;
pub mod server;
pub mod service;
pub mod storage;
pub mod synthesis;
pub mod translation;

// Re-export all configuration types
pub use language::*;
pub use logging::*;
pub use scratch::*;
pub use server::*;
pub use service::*;
pub use storage::*;
pub use synthesis::*;
pub use translation::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5050
}

/// Default maximum JSON body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default maximum voice upload size in bytes
pub fn default_max_upload_bytes() -> usize {
    60 * 1024 * 1024 // 60MB
}

pub fn default_voice_prefix() -> String {
    "voices".to_string()
}

pub fn default_local_voices_path() -> String {
    "./voice_store".to_string()
}

pub fn default_translator_endpoint() -> String {
    "http://127.0.0.1:5060".to_string()
}

pub fn default_src_lang() -> String {
    "eng_Latn".to_string()
}

pub fn default_tgt_lang() -> String {
    "hin_Deva".to_string()
}

pub fn default_max_length() -> u32 {
    256
}

pub fn default_num_beams() -> u32 {
    5
}

pub fn default_translation_timeout() -> u64 {
    120
}

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_placeholder_codes() -> Vec<String> {
    vec!["tl".to_string()]
}

pub fn default_hindi_markers() -> Vec<String> {
    ["maine", "bta", "kaisa", "hai", "tum", "mera", "kya", "aur", "nahi", "haan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_ref_audio_dir() -> String {
    "ref_audio".to_string()
}

pub fn default_output_dir() -> String {
    "output".to_string()
}

pub fn default_sweep_interval() -> u64 {
    300
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
