//! Voice storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which object store holds the reference voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Amazon S3 or an S3-compatible service
    #[default]
    S3,
    /// A local directory laid out like the bucket
    Local,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "local" => Ok(Self::Local),
            other => Err(format!("Unsupported storage backend: {}", other)),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::S3 => write!(f, "s3"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Voice storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,
    /// Key prefix under which voices are stored
    #[serde(default = "default_voice_prefix")]
    pub voice_prefix: String,
    /// S3 configuration
    #[serde(default)]
    pub s3: S3Config,
    /// Root directory for the local backend
    #[serde(default = "default_local_voices_path")]
    pub local_path: String,
    /// Largest accepted voice upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            voice_prefix: default_voice_prefix(),
            s3: S3Config::default(),
            local_path: default_local_voices_path(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl StorageConfig {
    /// Object key of a user's reference voice
    pub fn voice_key(&self, user_id: &str) -> String {
        voice_object_key(&self.voice_prefix, user_id)
    }
}

/// `{prefix}/{user_id}.wav`, or `{user_id}.wav` with an empty prefix
pub fn voice_object_key(prefix: &str, user_id: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}.wav", user_id)
    } else {
        format!("{}/{}.wav", prefix, user_id)
    }
}

/// S3 configuration
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct S3Config {
    /// S3 bucket name
    #[serde(default)]
    pub bucket: String,
    /// AWS region
    #[serde(default)]
    pub region: String,
    /// Access key ID
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key
    #[serde(default)]
    pub secret_access_key: String,
    /// Endpoint URL (for S3-compatible services)
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
