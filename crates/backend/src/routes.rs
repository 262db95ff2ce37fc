use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers;
use crate::state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // SPA: неизвестные пути отдают index.html
    let index = state.static_dir.join("index.html");
    let frontend = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));
    let pipeline = ServeDir::new(&state.pipeline_dir);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REPORTS
        // ========================================
        .route(
            "/api/report/page_text",
            get(handlers::a001_report::get_page_text),
        )
        // ========================================
        // PROXIES
        // ========================================
        .route("/api/gpt", post(handlers::proxy::chat_completion))
        .route("/api/raw_info", post(handlers::proxy::raw_info))
        // Report mapping and performance datasets
        .nest_service("/pipeline", pipeline)
        .fallback_service(frontend)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
    use crate::shared::notion::{NotionError, PageTextSource};
    use crate::shared::raw_info::{InfoLookup, RawInfoError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::Path;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EchoLlm {
        fail: bool,
    }

    #[async_trait]
    impl LlmProvider for EchoLlm {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            if self.fail {
                return Err(LlmError::RateLimitExceeded);
            }
            assert_eq!(messages[0].role, ChatRole::System);
            assert_eq!(messages[1].role, ChatRole::User);
            let content = format!("{}|{}", messages[0].content, messages[1].content);
            Ok(LlmResponse {
                content: content.clone(),
                tokens_used: Some(7),
                model: "fake".into(),
                finish_reason: None,
                raw: serde_json::json!({
                    "object": "chat.completion",
                    "choices": [ { "message": { "role": "assistant", "content": content } } ]
                }),
            })
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    struct FakeNotion;

    #[async_trait]
    impl PageTextSource for FakeNotion {
        async fn page_text(&self, page_id: &str) -> Result<String, NotionError> {
            match page_id {
                "1a2b3c4d5e6f40718293a4b5c6d7e8f9" => Ok("# 레포트\n본문".into()),
                "ffffffffffffffffffffffffffffffff" => Err(NotionError::Network("connection refused".into())),
                _ => Err(NotionError::Api {
                    status: 404,
                    body: serde_json::json!({ "code": "object_not_found" }),
                }),
            }
        }
    }

    struct FakeInfo;

    #[async_trait]
    impl InfoLookup for FakeInfo {
        async fn lookup(&self, user_input: &str) -> Result<String, RawInfoError> {
            if user_input.is_empty() {
                return Err(RawInfoError::Spawn("no python".into()));
            }
            Ok(format!("info for {}\n", user_input))
        }
    }

    fn app(dir: &Path, llm_fails: bool) -> Router {
        let static_dir = dir.join("dist");
        let pipeline_dir = dir.join("pipeline");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::create_dir_all(&pipeline_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(
            pipeline_dir.join("notion_page_ids.json"),
            r#"{"t_1":{"20230103_t_1_analyst_rp":"1a2b3c4d-5e6f-4071-8293-a4b5c6d7e8f9"}}"#,
        )
        .unwrap();

        configure_routes(AppState {
            llm: Arc::new(EchoLlm { fail: llm_fails }),
            notion: Arc::new(FakeNotion),
            raw_info: Arc::new(FakeInfo),
            static_dir,
            pipeline_dir,
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_page_text_found() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(get_request("/api/report/page_text?page_id=1a2b3c4d-5e6f-4071-8293-a4b5c6d7e8f9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["text"], "# 레포트\n본문");
    }

    #[tokio::test]
    async fn test_page_text_missing_id() {
        let dir = tempfile::tempdir().unwrap();
        for uri in ["/api/report/page_text", "/api/report/page_text?page_id=%20"] {
            let response = app(dir.path(), false).oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"], "Missing page_id");
        }
    }

    #[tokio::test]
    async fn test_page_text_rejects_non_notion_ids() {
        let dir = tempfile::tempdir().unwrap();
        for uri in [
            "/api/report/page_text?page_id=../users",
            "/api/report/page_text?page_id=x%2F..%2F..%2Fusers%3F",
            "/api/report/page_text?page_id=known",
        ] {
            let response = app(dir.path(), false).oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body_json(response).await["error"], "Invalid page_id");
        }
    }

    #[tokio::test]
    async fn test_page_text_upstream_status_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(get_request("/api/report/page_text?page_id=0f0e0d0c0b0a49088776655443322110"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "object_not_found");

        let response = app(dir.path(), false)
            .oneshot(get_request("/api/report/page_text?page_id=ffffffffffffffffffffffffffffffff"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_gpt_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(post_json(
                "/api/gpt",
                serde_json::json!({ "system": "analyst", "prompt": "005930" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["object"], "chat.completion");
        assert_eq!(body["choices"][0]["message"]["content"], "analyst|005930");
    }

    #[tokio::test]
    async fn test_gpt_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), true)
            .oneshot(post_json(
                "/api/gpt",
                serde_json::json!({ "system": "s", "prompt": "p" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_raw_info() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(post_json(
                "/api/raw_info",
                serde_json::json!({ "user_input": "카카오" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "info for 카카오\n");

        let response = app(dir.path(), false)
            .oneshot(post_json("/api/raw_info", serde_json::json!({ "user_input": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_pipeline_files_and_spa_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path(), false)
            .oneshot(get_request("/pipeline/notion_page_ids.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let mapping: contracts::domain::a001_report::ReportKeyMapping =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(
            mapping.0["t_1"]["20230103_t_1_analyst_rp"],
            "1a2b3c4d-5e6f-4071-8293-a4b5c6d7e8f9"
        );

        let response = app(dir.path(), false)
            .oneshot(get_request("/pipeline/missing.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app(dir.path(), false)
            .oneshot(get_request("/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>app</html>");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/gpt")
            .header("origin", "http://localhost:8080")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = app(dir.path(), false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
