//! REST helpers for the dashboard JSON API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. Components turn an `Err` into a
//! `Failed` fetch state, which renders differently from an empty result.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chunks::{ApiFilters, BotMetrics, ChunkDocument, InsightItem};

#[cfg(any(test, feature = "hydrate"))]
const BOTS_ENDPOINT: &str = "/api/bots";

#[cfg(any(test, feature = "hydrate"))]
fn bot_metrics_endpoint(bot_id: &str) -> String {
    format!("/api/bots/{bot_id}/metrics")
}

#[cfg(any(test, feature = "hydrate"))]
fn bot_chunks_endpoint(bot_id: &str) -> String {
    format!("/api/bots/{bot_id}/chunks")
}

#[cfg(any(test, feature = "hydrate"))]
fn bot_insights_endpoint(bot_id: &str) -> String {
    format!("/api/bots/{bot_id}/insights")
}

/// Query-string pairs for a chunk request. The bot id travels in the path.
#[cfg(any(test, feature = "hydrate"))]
fn chunk_query_pairs(filters: &ApiFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(query) = filters.query() {
        pairs.push(("searchQuery", query.to_owned()));
    }
    if let Some(threshold) = filters.metric_threshold {
        pairs.push(("metricThreshold", threshold.to_string()));
    }
    if let Some(key) = filters.sort_by {
        pairs.push(("sortBy", key.as_str().to_owned()));
    }
    if let Some(direction) = filters.sort_direction {
        pairs.push(("sortDirection", direction.as_str().to_owned()));
    }
    if let Some(page) = filters.page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(page_size) = filters.page_size {
        pairs.push(("pageSize", page_size.to_string()));
    }
    pairs
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(what: &str, status: u16, detail: Option<&str>) -> String {
    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!("{what} fetch failed: {status} ({detail})"),
        None => format!("{what} fetch failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorResponse {
    message: String,
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    what: &str,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let detail = resp.json::<ErrorResponse>().await.ok().map(|b| b.message);
        let message = fetch_failed_message(what, status, detail.as_deref());
        log::warn!("{message}");
        return Err(message);
    }
    resp.json::<T>().await.map_err(|e| {
        log::warn!("{what} decode failed: {e}");
        e.to_string()
    })
}

/// Fetch the selectable bot ids from `/api/bots`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_bots() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("bots", BOTS_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate metrics from `/api/bots/{bot_id}/metrics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_bot_metrics(bot_id: &str) -> Result<BotMetrics, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("metrics", &bot_metrics_endpoint(bot_id), &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bot_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of chunks from `/api/bots/{bot_id}/chunks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_chunks(filters: &ApiFilters) -> Result<Vec<ChunkDocument>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = bot_chunks_endpoint(&filters.bot_id);
        get_json("chunks", &url, &chunk_query_pairs(filters)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err("not available on server".to_owned())
    }
}

/// Fetch recommendations from `/api/bots/{bot_id}/insights`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_insights(bot_id: &str) -> Result<Vec<InsightItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("insights", &bot_insights_endpoint(bot_id), &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bot_id;
        Err("not available on server".to_owned())
    }
}
