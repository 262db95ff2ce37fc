//! Notion API client — текст страниц с отчётами агентов
//!
//! Страница читается через `GET /blocks/{page_id}/children` (с пагинацией),
//! из ответа берутся только блоки `paragraph`, весь `rich_text` склеивается
//! без разделителей.

use crate::shared::config::NotionConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Upper bound on children pages fetched for one Notion page
const MAX_PAGES: usize = 200;

/// Ошибки получения текста страницы
#[derive(Debug, Error)]
pub enum NotionError {
    /// Notion ответил не-2xx; тело ответа передаётся клиенту как есть
    #[error("Notion API returned HTTP {status}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid Notion API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Canonical form of a Notion page id: 32 hex digits, dashes dropped.
///
/// Anything else (path separators, dots, query characters) is rejected.
pub fn normalize_page_id(raw: &str) -> Option<String> {
    let id: String = raw.trim().chars().filter(|c| *c != '-').collect();
    (id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())).then_some(id)
}

/// Source of report page text
#[async_trait]
pub trait PageTextSource: Send + Sync {
    async fn page_text(&self, page_id: &str) -> Result<String, NotionError>;
}

#[derive(Debug, Deserialize)]
pub struct BlockChildren {
    #[serde(default)]
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Block {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub paragraph: Option<Paragraph>,
}

#[derive(Debug, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    pub text: Option<TextContent>,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
}

/// Append the text of every paragraph block to `out`.
pub fn extract_paragraph_text(blocks: &[Block], out: &mut String) {
    for block in blocks.iter().filter(|b| b.kind == "paragraph") {
        let Some(paragraph) = &block.paragraph else {
            continue;
        };
        for rt in &paragraph.rich_text {
            if let Some(text) = &rt.text {
                out.push_str(&text.content);
            }
        }
    }
}

/// Клиент Notion API
pub struct NotionClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    version: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.trim().to_string(),
            version: config.version.clone(),
        })
    }

    /// `{api_base}/blocks/{page_id}/children` with the id as one escaped segment
    fn children_url(&self, page_id: &str) -> Result<reqwest::Url, NotionError> {
        let mut url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| NotionError::InvalidBaseUrl(format!("{}: {}", self.api_base, e)))?;
        url.path_segments_mut()
            .map_err(|_| NotionError::InvalidBaseUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend(["blocks", page_id, "children"]);
        Ok(url)
    }

    async fn fetch_children(
        &self,
        page_id: &str,
        cursor: Option<&str>,
    ) -> Result<BlockChildren, NotionError> {
        let url = self.children_url(page_id)?;

        let mut request = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .header("Content-Type", "application/json");
        if let Some(cursor) = cursor {
            request = request.query(&[("start_cursor", cursor)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotionError::Network(format!("Notion API timed out: {}", e))
            } else {
                NotionError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "error": text }));
            tracing::warn!("Notion API error {} for page {}: {}", status, page_id, body);
            return Err(NotionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<BlockChildren>()
            .await
            .map_err(|e| NotionError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl PageTextSource for NotionClient {
    async fn page_text(&self, page_id: &str) -> Result<String, NotionError> {
        let mut text = String::new();
        let mut cursor: Option<String> = None;
        let mut seen = HashSet::new();

        for _ in 0..MAX_PAGES {
            let page = self.fetch_children(page_id, cursor.as_deref()).await?;
            extract_paragraph_text(&page.results, &mut text);

            match page.next_cursor {
                Some(next) if page.has_more => {
                    if !seen.insert(next.clone()) {
                        tracing::warn!("Notion page {} repeated cursor {}, stopping", page_id, next);
                        break;
                    }
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        tracing::debug!("Notion page {} text: {} chars", page_id, text.chars().count());
        Ok(text)
    }
}
