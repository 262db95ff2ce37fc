use contracts::domain::a001_report::{PageTextResponse, ReportKeyMapping, REPORT_MAPPING_PATH};
use gloo_net::http::Request;

const API_BASE: &str = "/api/report";

/// Получить таблицу ключ отчёта → id страницы Notion
pub async fn get_mapping() -> Result<ReportKeyMapping, String> {
    let response = Request::get(REPORT_MAPPING_PATH)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ReportKeyMapping = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Получить текст страницы отчёта
pub async fn get_page_text(page_id: &str) -> Result<String, String> {
    let url = format!("{}/page_text", API_BASE);

    let response = Request::get(&url)
        .query([("page_id", page_id)])
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PageTextResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.text)
}
