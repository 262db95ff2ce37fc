use serde::{Deserialize, Serialize};

/// POST /api/gpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub prompt: String,
}

/// POST /api/raw_info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInfoRequest {
    pub user_input: String,
}

/// Stdout of the info-lookup script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInfoResponse {
    pub result: String,
}

/// Тело ответа при ошибке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
