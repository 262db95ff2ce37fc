use axum::extract::State;
use axum::Json;
use contracts::shared::proxy::{ChatRequest, RawInfoRequest, RawInfoResponse};

use crate::api::error::ApiError;
use crate::shared::llm::ChatMessage;
use crate::state::AppState;

/// POST /api/gpt
///
/// Прокси к LLM: ответ провайдера возвращается без изменений.
pub async fn chat_completion(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let messages = vec![ChatMessage::system(req.system), ChatMessage::user(req.prompt)];

    match state.llm.chat_completion(messages).await {
        Ok(response) => {
            tracing::info!(
                "{} completion: model={}, tokens={:?}, finish={:?}",
                state.llm.provider_name(),
                response.model,
                response.tokens_used,
                response.finish_reason
            );
            Ok(Json(response.raw))
        }
        Err(e) => {
            tracing::error!("Error calling {} API: {}", state.llm.provider_name(), e);
            Err(ApiError::Internal("Internal Server Error".into()))
        }
    }
}

/// POST /api/raw_info
pub async fn raw_info(
    State(state): State<AppState>,
    Json(req): Json<RawInfoRequest>,
) -> Result<Json<RawInfoResponse>, ApiError> {
    let result = state.raw_info.lookup(&req.user_input).await.map_err(|e| {
        tracing::error!("Info lookup failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(RawInfoResponse { result }))
}
