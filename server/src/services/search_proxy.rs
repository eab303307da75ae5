//! Data source backed by a remote search-index proxy.
//!
//! Thin HTTP wrapper over four proxy endpoints:
//!
//! - `GET  {base}/bots`
//! - `GET  {base}/bots/{id}/metrics`
//! - `POST {base}/bots/{id}/chunks` (JSON `ApiFilters` body)
//! - `GET  {base}/bots/{id}/insights`
//!
//! Pure parsing lives in the `parse_*` functions for testability. Averages
//! are moved onto the 0-10 scale here, using the configured upstream scale.
//! A proxy without an insights endpoint (404) gets insights derived locally.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use chunks::insights;
use chunks::model::DEFAULT_PAGE_SIZE;
use chunks::scale::ScoreScale;
use chunks::{ApiFilters, BotMetrics, ChunkDocument, InsightItem};

use super::source::{DataSource, SourceError, require_bot_id};
use crate::config::SearchProxyConfig;

#[cfg(test)]
#[path = "search_proxy_test.rs"]
mod tests;

// =============================================================================
// CLIENT
// =============================================================================

pub struct SearchProxySource {
    http: reqwest::Client,
    base: Url,
    scale: ScoreScale,
}

impl SearchProxySource {
    /// # Errors
    ///
    /// Returns [`SourceError::HttpClientBuild`] if the base URL is not a valid
    /// absolute URL or the HTTP client cannot be constructed.
    pub fn new(config: &SearchProxyConfig) -> Result<Self, SourceError> {
        let base = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base, scale: config.scale })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        build_endpoint(&self.base, segments)
    }

    async fn read(&self, request: reqwest::RequestBuilder) -> Result<String, SourceError> {
        let response = request.send().await.map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| SourceError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(SourceError::Upstream { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, SourceError> {
    let url = Url::parse(raw.trim()).map_err(|e| SourceError::HttpClientBuild(format!("search proxy url: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(SourceError::HttpClientBuild(format!("search proxy url is not a base: {raw}")));
    }
    Ok(url)
}

/// Append percent-encoded path segments to `base`.
fn build_endpoint(base: &Url, segments: &[&str]) -> Result<Url, SourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::HttpClientBuild(format!("search proxy url is not a base: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[async_trait::async_trait]
impl DataSource for SearchProxySource {
    async fn list_bots(&self) -> Result<Vec<String>, SourceError> {
        let url = self.endpoint(&["bots"])?;
        let text = self.read(self.http.get(url)).await?;
        parse_bots(&text)
    }

    async fn bot_metrics(&self, bot_id: &str) -> Result<BotMetrics, SourceError> {
        let id = require_bot_id(bot_id)?;
        let url = self.endpoint(&["bots", id, "metrics"])?;
        let text = self.read(self.http.get(url)).await.map_err(|e| not_found_as_unknown(e, id))?;
        parse_metrics(&text, self.scale)
    }

    async fn list_chunks(&self, filters: &ApiFilters) -> Result<Vec<ChunkDocument>, SourceError> {
        let id = require_bot_id(&filters.bot_id)?;
        let url = self.endpoint(&["bots", id, "chunks"])?;
        let text = self
            .read(self.http.post(url).json(filters))
            .await
            .map_err(|e| not_found_as_unknown(e, id))?;
        let page_size = filters.effective_page_size(DEFAULT_PAGE_SIZE) as usize;
        parse_chunks(&text, page_size)
    }

    async fn insights(&self, bot_id: &str) -> Result<Vec<InsightItem>, SourceError> {
        let id = require_bot_id(bot_id)?;
        let url = self.endpoint(&["bots", id, "insights"])?;
        match self.read(self.http.get(url)).await {
            Ok(text) => parse_insights(&text),
            Err(SourceError::Upstream { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                tracing::debug!(bot_id = %id, "search proxy has no insights endpoint; deriving locally");
                let metrics = self.bot_metrics(id).await?;
                Ok(insights::evaluate(&metrics))
            }
            Err(e) => Err(e),
        }
    }
}

/// A 404 on a bot-scoped endpoint means the bot does not exist upstream.
fn not_found_as_unknown(err: SourceError, bot_id: &str) -> SourceError {
    match err {
        SourceError::Upstream { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            SourceError::UnknownBot(bot_id.to_owned())
        }
        other => other,
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Chunk listings arrive either as a bare array or wrapped in the search
/// index's `hits.hits` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChunksResponse {
    List(Vec<ChunkDocument>),
    Search { hits: Hits },
}

#[derive(Deserialize)]
struct Hits {
    hits: Vec<ChunkDocument>,
}

// =============================================================================
// PARSING
// =============================================================================

fn decode<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, SourceError> {
    serde_json::from_str(json).map_err(|e| SourceError::Decode(e.to_string()))
}

fn parse_bots(json: &str) -> Result<Vec<String>, SourceError> {
    decode(json)
}

fn parse_metrics(json: &str, scale: ScoreScale) -> Result<BotMetrics, SourceError> {
    let metrics: BotMetrics = decode(json)?;
    Ok(scale.normalize(metrics))
}

/// Decode a chunk page, clamp every score into range and enforce the page
/// size even if the proxy ignores it.
fn parse_chunks(json: &str, page_size: usize) -> Result<Vec<ChunkDocument>, SourceError> {
    let chunks = match decode::<ChunksResponse>(json)? {
        ChunksResponse::List(chunks) | ChunksResponse::Search { hits: Hits { hits: chunks } } => chunks,
    };
    Ok(chunks
        .into_iter()
        .take(page_size)
        .map(|mut chunk| {
            chunk.source.eval_metrics = chunk.source.eval_metrics.clamped();
            chunk
        })
        .collect())
}

fn parse_insights(json: &str) -> Result<Vec<InsightItem>, SourceError> {
    decode(json)
}
