use super::*;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::services::source::DataSource;

/// Source whose every call fails with a transport error.
struct DownSource;

#[async_trait::async_trait]
impl DataSource for DownSource {
    async fn list_bots(&self) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn bot_metrics(&self, _bot_id: &str) -> Result<BotMetrics, SourceError> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn list_chunks(&self, _filters: &ApiFilters) -> Result<Vec<ChunkDocument>, SourceError> {
        Err(SourceError::Upstream { status: 500, body: "boom".into() })
    }

    async fn insights(&self, _bot_id: &str) -> Result<Vec<InsightItem>, SourceError> {
        Err(SourceError::Decode("expected value".into()))
    }
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = api_routes(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

#[test]
fn status_follows_error_kind() {
    assert_eq!(source_error_to_status(&SourceError::InvalidRequest(String::new())), StatusCode::BAD_REQUEST);
    assert_eq!(source_error_to_status(&SourceError::UnknownBot("x".into())), StatusCode::NOT_FOUND);
    assert_eq!(source_error_to_status(&SourceError::Transport(String::new())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        source_error_to_status(&SourceError::Upstream { status: 503, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(source_error_to_status(&SourceError::Decode(String::new())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        source_error_to_status(&SourceError::HttpClientBuild(String::new())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = get_json(AppState::mock(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn lists_bots() {
    let (status, json) = get_json(AppState::mock(), "/api/bots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!(["bot1", "bot2", "bot3", "bot4"]));
}

#[tokio::test]
async fn metrics_use_camel_case_wire_names() {
    let (status, json) = get_json(AppState::mock(), "/api/bots/bot2/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["botId"], "bot2");
    assert!(json["totalChunks"].as_u64().unwrap() > 0);
    assert_eq!(json["scoresDistribution"]["contextualSufficiency"].as_array().unwrap().len(), 10);
    assert!(json["lowQualityChunks"].is_u64());
}

#[tokio::test]
async fn unknown_bot_is_404_with_code() {
    let (status, json) = get_json(AppState::mock(), "/api/bots/bot9/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "E_UNKNOWN_BOT");
    assert_eq!(json["message"], "unknown bot: bot9");
}

#[tokio::test]
async fn chunks_default_to_configured_page_size() {
    let state = AppState { default_page_size: 4, ..AppState::mock() };
    let (status, json) = get_json(state, "/api/bots/bot1/chunks").await;
    assert_eq!(status, StatusCode::OK);
    let page = json.as_array().unwrap();
    assert_eq!(page.len(), 4);
    assert_eq!(page[0]["_id"], "chunk_1");
    assert!(page[0]["_source"]["eval_metrics"]["cohesion_score"].is_u64());
}

#[tokio::test]
async fn chunks_honor_query_string_filters() {
    let uri = "/api/bots/bot1/chunks?searchQuery=document_1&sortBy=doc_name&sortDirection=desc&page=1&pageSize=2";
    let (status, json) = get_json(AppState::mock(), uri).await;
    assert_eq!(status, StatusCode::OK);
    let page = json.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|c| c["_source"]["doc_name"].as_str().unwrap().starts_with("Document_1")));
}

#[tokio::test]
async fn oversized_page_is_capped() {
    let (status, json) = get_json(AppState::mock(), "/api/bots/bot3/chunks?pageSize=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().len() <= 100);
}

#[tokio::test]
async fn malformed_query_is_400() {
    let (status, json) = get_json(AppState::mock(), "/api/bots/bot1/chunks?sortBy=size").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "E_INVALID_REQUEST");
}

#[tokio::test]
async fn insights_are_ordered_by_kind() {
    let (status, json) = get_json(AppState::mock(), "/api/bots/bot1/insights").await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<InsightItem> = serde_json::from_value(json).unwrap();
    assert!(items.windows(2).all(|w| w[0].kind.priority() <= w[1].kind.priority()));
}

#[tokio::test]
async fn upstream_failures_are_502() {
    let state = AppState::new(Arc::new(DownSource), 10);
    for uri in ["/api/bots", "/api/bots/bot1/metrics", "/api/bots/bot1/chunks", "/api/bots/bot1/insights"] {
        let (status, json) = get_json(state.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY, "{uri}");
        assert!(json["error"].as_str().unwrap().starts_with("E_UPSTREAM"), "{uri}");
    }
}
