//! Model environments driven as child processes

use super::{SynthesisBackend, SynthesisJob};
use crate::config::SynthesisBackendConfig;
use crate::utils::error::{CloneError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, error, info};

const STDERR_TAIL_CHARS: usize = 2000;

/// Runs `interpreter script --checkpoint .. --config .. --ref_audio .. --text .. --language .. --output ..`
#[derive(Debug, Clone)]
pub struct SubprocessBackend {
    config: SynthesisBackendConfig,
}

impl SubprocessBackend {
    pub fn new(config: SynthesisBackendConfig) -> Self {
        Self { config }
    }

    /// Resolve a relative path against the server's directory when the
    /// child runs elsewhere
    fn anchored(&self, path: &Path) -> Result<PathBuf> {
        if self.config.working_dir.is_none() || path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(std::path::absolute(path)?)
    }

    fn command(&self, job: &SynthesisJob) -> Result<Command> {
        // A bare interpreter name is looked up on PATH, not resolved
        let interpreter = if self.config.interpreter.components().count() > 1 {
            self.anchored(&self.config.interpreter)?
        } else {
            self.config.interpreter.clone()
        };

        let mut cmd = Command::new(interpreter);
        cmd.arg(self.anchored(&self.config.script)?)
            .arg("--checkpoint")
            .arg(self.anchored(&self.config.checkpoint_dir)?)
            .arg("--config")
            .arg(self.anchored(&self.config.config_file)?)
            .arg("--ref_audio")
            .arg(self.anchored(&job.reference_audio)?)
            .arg("--text")
            .arg(&job.text)
            .arg("--language")
            .arg(job.language.as_str())
            .arg("--output")
            .arg(self.anchored(&job.output)?)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }
}

#[async_trait]
impl SynthesisBackend for SubprocessBackend {
    async fn synthesize(&self, job: &SynthesisJob) -> Result<()> {
        let started = Instant::now();
        let child = self.command(job)?.spawn().map_err(|e| {
            CloneError::synthesis_failed(format!(
                "failed to start {}: {}",
                self.config.interpreter.display(),
                e
            ))
        })?;

        let output = match self.config.timeout_secs {
            Some(secs) => {
                match tokio::time::timeout(Duration::from_secs(secs), child.wait_with_output())
                    .await
                {
                    Ok(result) => result?,
                    // Dropping the future drops the child, which kills it
                    Err(_) => {
                        error!(backend = %self.config.name, "Synthesis timed out after {}s", secs);
                        return Err(CloneError::synthesis_failed(format!(
                            "{} timed out after {}s",
                            self.config.name, secs
                        )));
                    }
                }
            }
            None => child.wait_with_output().await?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail = stderr_tail(&stderr);
            error!(
                backend = %self.config.name,
                code = ?output.status.code(),
                stderr = %tail,
                "Synthesis process failed"
            );
            return Err(CloneError::synthesis_failed(format!(
                "{} exited with {}",
                self.config.name, output.status
            )));
        }

        debug!(
            backend = %self.config.name,
            stdout = %String::from_utf8_lossy(&output.stdout).trim(),
            "Synthesis process output"
        );
        info!(
            backend = %self.config.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Synthesis finished"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

/// Last lines of stderr, where tracebacks end
fn stderr_tail(stderr: &str) -> &str {
    let trimmed = stderr.trim_end();
    let count = trimmed.chars().count();
    if count <= STDERR_TAIL_CHARS {
        return trimmed;
    }
    let start = trimmed
        .char_indices()
        .nth(count - STDERR_TAIL_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &trimmed[start..]
}
