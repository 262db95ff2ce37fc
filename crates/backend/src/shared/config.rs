use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub notion: NotionConfig,
    pub raw_info: RawInfoConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Built frontend (trunk output)
    pub static_dir: String,
    /// Output directory of the report pipeline (served under /pipeline)
    pub pipeline_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 1234,
            static_dir: "dist".into(),
            pipeline_dir: "pipeline".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".into(),
            max_tokens: 3000,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotionConfig {
    pub token: String,
    pub api_base: String,
    pub version: String,
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: "https://api.notion.com/v1".into(),
            version: "2022-06-28".into(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RawInfoConfig {
    pub python: String,
    pub script: String,
    pub working_dir: String,
    pub timeout_secs: u64,
}

impl Default for RawInfoConfig {
    fn default() -> Self {
        Self {
            python: "python3".into(),
            script: "get_raw_info_for_chatbot.py".into(),
            working_dir: ".".into(),
            timeout_secs: 600,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 1234
static_dir = "dist"
pipeline_dir = "pipeline"

[openai]
model = "gpt-4o-mini"
max_tokens = 3000
temperature = 0.7

[notion]
api_base = "https://api.notion.com/v1"
version = "2022-06-28"

[raw_info]
python = "python3"
script = "get_raw_info_for_chatbot.py"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `OPENAI_API_KEY` / `NOTION_API_TOKEN` override the keys from the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    apply_env_overrides(
        &mut config,
        std::env::var("OPENAI_API_KEY").ok(),
        std::env::var("NOTION_API_TOKEN").ok(),
    );
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn apply_env_overrides(config: &mut Config, openai_key: Option<String>, notion_token: Option<String>) {
    if let Some(key) = openai_key.filter(|k| !k.trim().is_empty()) {
        config.openai.api_key = key;
    }
    if let Some(token) = notion_token.filter(|t| !t.trim().is_empty()) {
        config.notion.token = token;
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolve a configured path.
/// Absolute paths are used as is, relative ones are taken from the executable
/// directory when it exists there, otherwise from the current directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(dir) = exe_dir() {
        let candidate = dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(configured)
}
