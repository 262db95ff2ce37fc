use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::proxy::ErrorResponse;
use thiserror::Error;

use crate::shared::notion::NotionError;
use crate::shared::raw_info::RawInfoError;

/// Ошибка HTTP обработчика
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Ответ внешнего API передаётся клиенту с тем же статусом и телом
    #[error("upstream returned HTTP {status}")]
    Upstream {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Upstream { status, body } => (status, Json(body)).into_response(),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(msg))).into_response()
            }
        }
    }
}

impl From<NotionError> for ApiError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Api { status, body } => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RawInfoError> for ApiError {
    fn from(err: RawInfoError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
