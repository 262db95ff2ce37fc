//! Запуск внешнего скрипта сбора информации по тикеру
//!
//! `python3 get_raw_info_for_chatbot.py <user_input>`; stdout целиком уходит
//! клиенту, stderr только логируется.

use crate::shared::config::{resolve_path, RawInfoConfig};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum RawInfoError {
    #[error("Failed to start info script: {0}")]
    Spawn(String),

    #[error("Info script I/O error: {0}")]
    Io(String),

    #[error("Info script did not finish within {0} seconds")]
    Timeout(u64),
}

/// Free-text info lookup (slow, single-shot)
#[async_trait]
pub trait InfoLookup: Send + Sync {
    async fn lookup(&self, user_input: &str) -> Result<String, RawInfoError>;
}

/// Runs the configured script as a child process
pub struct ScriptRunner {
    interpreter: String,
    script: PathBuf,
    working_dir: PathBuf,
    timeout_secs: u64,
}

impl ScriptRunner {
    pub fn new(
        interpreter: impl Into<String>,
        script: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            working_dir: working_dir.into(),
            timeout_secs,
        }
    }

    pub fn from_config(config: &RawInfoConfig) -> Self {
        Self::new(
            config.python.clone(),
            config.script.clone(),
            resolve_path(&config.working_dir),
            config.timeout_secs,
        )
    }

    async fn run(&self, user_input: &str) -> Result<String, RawInfoError> {
        let mut child = Command::new(&self.interpreter)
            .arg(&self.script)
            .arg(user_input)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RawInfoError::Spawn(format!("{} {}: {}", self.interpreter, self.script.display(), e)))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| RawInfoError::Io("missing stdout".into()))?;
        let stderr = child.stderr.take();

        let stderr_task = tokio::spawn(async move {
            let Some(stderr) = stderr else {
                return;
            };
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::warn!("info script stderr: {}", line);
            }
        });

        let mut output = Vec::new();
        stdout
            .read_to_end(&mut output)
            .await
            .map_err(|e| RawInfoError::Io(e.to_string()))?;

        let status = child
            .wait()
            .await
            .map_err(|e| RawInfoError::Io(e.to_string()))?;
        let _ = stderr_task.await;

        // Ненулевой код возврата не считается ошибкой: клиент получает то, что успел вывести скрипт
        if status.success() {
            tracing::info!("info script finished: {}", status);
        } else {
            tracing::warn!("info script finished with {}", status);
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[async_trait]
impl InfoLookup for ScriptRunner {
    async fn lookup(&self, user_input: &str) -> Result<String, RawInfoError> {
        tracing::info!("info lookup for '{}'", user_input);
        if self.timeout_secs == 0 {
            return self.run(user_input).await;
        }
        match tokio::time::timeout(Duration::from_secs(self.timeout_secs), self.run(user_input))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(RawInfoError::Timeout(self.timeout_secs)),
        }
    }
}
