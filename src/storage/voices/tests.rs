//! Tests for voice storage

#[cfg(test)]
mod tests {
    use super::super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_store_round_trip() {
        let root = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();
        let store = LocalVoiceStore::new(root.path()).await.unwrap();

        store
            .store("voices/alice.wav", Bytes::from_static(b"RIFFdata"))
            .await
            .unwrap();
        assert!(root.path().join("voices/alice.wav").exists());

        let dest = scratch.path().join("alice_ref.wav");
        store.fetch("voices/alice.wav", &dest).await.unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"RIFFdata");
    }

    #[tokio::test]
    async fn test_store_replaces_previous_voice() {
        let root = TempDir::new().unwrap();
        let store = LocalVoiceStore::new(root.path()).await.unwrap();

        store.store("voices/bob.wav", Bytes::from_static(b"old")).await.unwrap();
        store.store("voices/bob.wav", Bytes::from_static(b"new")).await.unwrap();

        assert_eq!(std::fs::read(root.path().join("voices/bob.wav")).unwrap(), b"new");
        let leftovers = std::fs::read_dir(root.path().join("voices")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[tokio::test]
    async fn test_missing_voice_is_reference_not_found() {
        let root = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();
        let store = LocalVoiceStore::new(root.path()).await.unwrap();

        let err = store
            .fetch("voices/ghost.wav", &scratch.path().join("ghost_ref.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, CloneError::ReferenceNotFound(_)));
        assert_eq!(err.to_string(), "Reference audio not found: voices/ghost.wav");
    }

    #[tokio::test]
    async fn test_escaping_keys_are_rejected() {
        let root = TempDir::new().unwrap();
        let store = LocalVoiceStore::new(root.path()).await.unwrap();

        let err = store
            .store("voices/../../etc/passwd", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CloneError::InvalidField(_)));
        assert!(check_key("/abs.wav").is_err());
        assert!(check_key("voices//x.wav").is_err());
        assert!(check_key("voices/alice.wav").is_ok());
    }

    #[tokio::test]
    async fn test_factory_builds_local_store() {
        let root = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::Local,
            local_path: root.path().to_string_lossy().into_owned(),
            ..StorageConfig::default()
        };

        let store = create_voice_store(&config).await.unwrap();
        assert_eq!(store.backend(), "local");
    }
}
