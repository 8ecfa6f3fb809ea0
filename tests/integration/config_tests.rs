//! Configuration loading tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tts_clone_server::config::{Config, RetentionPolicy, StorageBackend, Validate};
    use tts_clone_server::utils::error::CloneError;

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Config::load(dir.path().join("absent.yaml")).await;

        // Defaults select S3, which needs credentials from the environment
        match result {
            Ok(config) => assert_eq!(config.storage().backend, StorageBackend::S3),
            Err(e) => assert!(matches!(e, CloneError::Config(_))),
        }
    }

    #[tokio::test]
    async fn test_full_file_round_trips_through_yaml() {
        let yaml = r#"
server:
  port: 6060
storage:
  backend: local
  local_path: ./voice_store
translation:
  provider: passthrough
synthesis:
  hindi:
    name: hindi
    interpreter: /opt/tts_hin/bin/python3
    script: /opt/tts_hin/xtts_hin.py
    checkpoint_dir: /opt/tts_hin/checkpoint
    config_file: /opt/tts_hin/checkpoint/config.json
    timeout_secs: 600
scratch:
  retention: keep
  max_age_secs: 86400
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 6060);
        assert_eq!(config.synthesis().hindi.timeout_secs, Some(600));
        assert_eq!(config.synthesis().english.name, "tts_eng");
        assert_eq!(config.scratch().retention, RetentionPolicy::Keep);

        let reparsed: tts_clone_server::config::ServiceConfig =
            serde_yaml::from_str(&config.to_yaml().unwrap()).unwrap();
        assert!(reparsed.validate().is_ok());
        assert_eq!(reparsed.scratch.max_age_secs, Some(86400));
    }

    #[tokio::test]
    async fn test_zero_timeout_is_rejected() {
        let yaml = r#"
storage:
  backend: local
synthesis:
  english:
    name: english
    interpreter: python3
    script: xtts_eng.py
    checkpoint_dir: checkpoint
    config_file: checkpoint/config.json
    timeout_secs: 0
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
