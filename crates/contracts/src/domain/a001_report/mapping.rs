use super::key::ReportKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of `notion_page_ids.json`: `section → (full key → page id)`.
///
/// Read-only; the client fetches a fresh snapshot for every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportKeyMapping(pub HashMap<String, HashMap<String, String>>);

impl ReportKeyMapping {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Page id for the key; `None` when either level is missing or the id is blank.
    pub fn lookup(&self, key: &ReportKey) -> Option<&str> {
        self.0
            .get(key.section.as_str())
            .and_then(|section| section.get(&key.full_key))
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn insert(&mut self, key: &ReportKey, page_id: impl Into<String>) {
        self.0
            .entry(key.section.as_str().to_string())
            .or_default()
            .insert(key.full_key.clone(), page_id.into());
    }
}

/// GET /api/report/page_text response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTextResponse {
    pub text: String,
}
