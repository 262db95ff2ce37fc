use contracts::shared::proxy::{ChatRequest, RawInfoRequest, RawInfoResponse};
use gloo_net::http::Request;

/// Сырые данные по тикеру (скрипт на сервере, может работать долго)
pub async fn post_raw_info(user_input: &str) -> Result<String, String> {
    let body = RawInfoRequest {
        user_input: user_input.to_string(),
    };

    let response = Request::post("/api/raw_info")
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: RawInfoResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.result)
}

/// Completion payload of the LLM proxy, as returned by the provider
pub async fn post_chat(request: &ChatRequest) -> Result<serde_json::Value, String> {
    let response = Request::post("/api/gpt")
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
