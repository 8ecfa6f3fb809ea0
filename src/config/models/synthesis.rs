//! Synthesis backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One isolated voice-cloning environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisBackendConfig {
    /// Name used in logs
    pub name: String,
    /// Interpreter executable of the model environment
    pub interpreter: PathBuf,
    /// Inference script passed as the first interpreter argument
    pub script: PathBuf,
    /// Model checkpoint directory
    pub checkpoint_dir: PathBuf,
    /// Model config file
    pub config_file: PathBuf,
    /// Working directory of the child process; relative paths above and in
    /// each job stay relative to the server's directory
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    /// Kill the child after this many seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SynthesisBackendConfig {
    fn for_model_dir(name: &str, dir: &str, script: &str, env: &str) -> Self {
        Self {
            name: name.to_string(),
            interpreter: PathBuf::from(format!("./{}/{}/bin/python3", dir, env)),
            script: PathBuf::from(format!("{}/{}", dir, script)),
            checkpoint_dir: PathBuf::from(format!("{}/checkpoint", dir)),
            config_file: PathBuf::from(format!("{}/checkpoint/config.json", dir)),
            working_dir: None,
            timeout_secs: None,
        }
    }
}

/// Synthesis configuration: one backend for Hindi, one for everything else
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Backend used for every language except Hindi
    #[serde(default = "default_english_backend")]
    pub english: SynthesisBackendConfig,
    /// Backend used for Hindi
    #[serde(default = "default_hindi_backend")]
    pub hindi: SynthesisBackendConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            english: default_english_backend(),
            hindi: default_hindi_backend(),
        }
    }
}

fn default_english_backend() -> SynthesisBackendConfig {
    SynthesisBackendConfig::for_model_dir("tts_eng", "tts_eng", "xtts_eng.py", "envtts_eng")
}

fn default_hindi_backend() -> SynthesisBackendConfig {
    SynthesisBackendConfig::for_model_dir("tts_hin", "tts_hin", "xtts_hin.py", "envtts_hin")
}
