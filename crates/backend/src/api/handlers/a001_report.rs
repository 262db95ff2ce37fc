use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_report::PageTextResponse;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::shared::notion::normalize_page_id;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageTextParams {
    pub page_id: Option<String>,
}

/// GET /api/report/page_text?page_id=...
///
/// Текст страницы Notion с отчётом агента.
pub async fn get_page_text(
    State(state): State<AppState>,
    Query(params): Query<PageTextParams>,
) -> Result<Json<PageTextResponse>, ApiError> {
    let page_id = params
        .page_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing page_id".into()))?;
    let page_id = normalize_page_id(page_id).ok_or_else(|| {
        tracing::warn!("Rejected page_id {:?}", page_id);
        ApiError::BadRequest("Invalid page_id".into())
    })?;

    let text = state.notion.page_text(&page_id).await.map_err(|e| {
        tracing::error!("Error fetching page text for {}: {}", page_id, e);
        ApiError::from(e)
    })?;

    Ok(Json(PageTextResponse { text }))
}
