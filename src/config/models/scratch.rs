//! Scratch directory configuration

use super::*;
use serde::{Deserialize, Serialize};

/// What happens to per-request scratch files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Remove reference and output files once the request finishes
    #[default]
    DeleteAfterResponse,
    /// Leave files in place; rely on the sweeper (if configured)
    Keep,
}

/// Scratch directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchConfig {
    /// Directory for downloaded reference voices
    #[serde(default = "default_ref_audio_dir")]
    pub ref_audio_dir: String,
    /// Directory for synthesized audio
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Retention policy
    #[serde(default)]
    pub retention: RetentionPolicy,
    /// Files older than this are swept (disabled when unset)
    #[serde(default)]
    pub max_age_secs: Option<u64>,
    /// How often the sweeper runs
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            ref_audio_dir: default_ref_audio_dir(),
            output_dir: default_output_dir(),
            retention: RetentionPolicy::default(),
            max_age_secs: None,
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}
