use std::path::PathBuf;
use std::sync::Arc;

use crate::shared::config::{resolve_path, Config};
use crate::shared::llm::{LlmProvider, OpenAiProvider};
use crate::shared::notion::{NotionClient, PageTextSource};
use crate::shared::raw_info::{InfoLookup, ScriptRunner};

/// Общее состояние обработчиков. Не меняется после старта.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmProvider>,
    pub notion: Arc<dyn PageTextSource>,
    pub raw_info: Arc<dyn InfoLookup>,
    pub static_dir: PathBuf,
    pub pipeline_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        if config.openai.api_key.trim().is_empty() {
            tracing::warn!("OpenAI API key is not configured, /api/gpt will fail");
        }
        if config.notion.token.trim().is_empty() {
            tracing::warn!("Notion token is not configured, report text lookups will fail");
        }

        Ok(Self {
            llm: Arc::new(OpenAiProvider::from_config(&config.openai)),
            notion: Arc::new(NotionClient::new(&config.notion)?),
            raw_info: Arc::new(ScriptRunner::from_config(&config.raw_info)),
            static_dir: resolve_path(&config.server.static_dir),
            pipeline_dir: resolve_path(&config.server.pipeline_dir),
        })
    }
}
