//! Test environment fixtures
//!
//! Builds a real pipeline rooted in a temporary directory. The two model
//! environments are `/bin/sh` scripts that copy the reference voice to the
//! output path and log their arguments.

use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tts_clone_server::config::{
    Config, LanguageConfig, StorageBackend, SynthesisBackendConfig,
};
use tts_clone_server::core::language::{LanguageClassifier, LanguageDetection};
use tts_clone_server::core::pipeline::CloneService;
use tts_clone_server::core::reference::ReferenceFetcher;
use tts_clone_server::core::synthesis::Synthesizer;
use tts_clone_server::core::translation::create_translator;
use tts_clone_server::server::AppState;
use tts_clone_server::storage::{ScratchSpace, create_voice_store};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How the fake model environments behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendBehavior {
    /// Copy the reference to the output and exit 0
    Succeed,
    /// Write output, then exit non-zero
    FailAfterWriting,
}

/// Raw detection that always reports English, as a detector does for
/// romanized Hindi
pub struct AlwaysEnglish;

impl LanguageDetection for AlwaysEnglish {
    fn detect(&self, _text: &str) -> Option<String> {
        Some("en".to_string())
    }
}

/// Small mono 16 kHz WAV
pub fn wav_bytes(samples: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..samples {
            writer.write_sample(((i % 64) as i16) * 100).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// A wired service in a temporary directory
pub struct TestEnv {
    pub root: TempDir,
    pub config: Config,
    pub translator: MockServer,
}

impl TestEnv {
    pub async fn new(behavior: BackendBehavior) -> Self {
        let root = TempDir::new().unwrap();
        let translator = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&translator)
            .await;

        let mut config = Config::default();
        let dir = |name: &str| root.path().join(name).to_string_lossy().into_owned();
        config.service.storage.backend = StorageBackend::Local;
        config.service.storage.local_path = dir("bucket");
        config.service.scratch.ref_audio_dir = dir("ref_audio");
        config.service.scratch.output_dir = dir("output");
        config.service.translation.endpoint = translator.uri();
        config.service.translation.timeout_secs = 5;
        config.service.synthesis.english = fake_backend(&root, "tts_eng", behavior);
        config.service.synthesis.hindi = fake_backend(&root, "tts_hin", behavior);
        config.validate().unwrap();

        Self {
            root,
            config,
            translator,
        }
    }

    /// Answer every translation request with `output`
    pub async fn translate_to(&self, output: &str) {
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "translations": [output] })),
            )
            .mount(&self.translator)
            .await;
    }

    /// Put a reference voice for `user_id` in the bucket
    pub fn seed_voice(&self, user_id: &str) {
        let dir = self.root.path().join("bucket/voices");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}.wav", user_id)), wav_bytes(1600)).unwrap();
    }

    /// Arguments of every invocation of a fake backend
    pub fn calls(&self, backend: &str) -> Vec<Vec<String>> {
        let log = self.root.path().join(format!("{}.log", backend));
        let content = std::fs::read_to_string(log).unwrap_or_default();
        content
            .split("---\n")
            .filter(|call| !call.trim().is_empty())
            .map(|call| call.lines().map(str::to_string).collect())
            .collect()
    }

    pub fn scratch_file(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Application state wired through the real factories
    pub async fn app_state(&self) -> actix_web::web::Data<AppState> {
        let config = &self.config;
        let scratch = Arc::new(ScratchSpace::prepare(config.scratch()).await.unwrap());
        let store = create_voice_store(config.storage()).await.unwrap();
        let translator = create_translator(config.translation()).await.unwrap();
        let classifier =
            LanguageClassifier::new(&LanguageConfig::default(), Arc::new(AlwaysEnglish));

        let service = CloneService::new(
            Arc::new(classifier),
            translator,
            ReferenceFetcher::new(store, scratch.clone(), config.storage()),
            Synthesizer::from_config(config.synthesis()),
            scratch,
            config.scratch().retention,
        );
        actix_web::web::Data::new(AppState::new(config.clone(), service))
    }
}

fn fake_backend(root: &TempDir, name: &str, behavior: BackendBehavior) -> SynthesisBackendConfig {
    let log = root.path().join(format!("{}.log", name));
    let tail = match behavior {
        BackendBehavior::Succeed => "",
        BackendBehavior::FailAfterWriting => "echo 'CUDA error: out of memory' >&2\nexit 1\n",
    };
    let body = format!(
        r#"ref=""
out=""
prev=""
for arg in "$@"; do
  case "$prev" in
    --ref_audio) ref="$arg" ;;
    --output) out="$arg" ;;
  esac
  prev="$arg"
done
printf '%s\n' "$@" >> "{log}"
printf -- '---\n' >> "{log}"
cp "$ref" "$out"
{tail}"#,
        log = log.display(),
        tail = tail
    );

    let model_dir = root.path().join(name);
    std::fs::create_dir_all(model_dir.join("checkpoint")).unwrap();
    let script = model_dir.join("xtts.sh");
    std::fs::write(&script, body).unwrap();

    SynthesisBackendConfig {
        name: name.to_string(),
        interpreter: "/bin/sh".into(),
        script,
        checkpoint_dir: model_dir.join("checkpoint"),
        config_file: model_dir.join("checkpoint/config.json"),
        working_dir: None,
        timeout_secs: Some(30),
    }
}
