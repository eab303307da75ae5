//! Data access layer: the `DataSource` trait and its error type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers hold an `Arc<dyn DataSource>` and never know whether the
//! data comes from the generated in-process corpus (`mock`) or from the
//! remote search-index proxy (`search_proxy`).
//!
//! DESIGN
//! ======
//! - Averages in every returned `BotMetrics` are on the 0-10 scale.
//! - `list_chunks` returns at most one page; there is no total count.
//! - `insights` is derived from metrics unless the backend computes it.

use chunks::{ApiFilters, BotMetrics, ChunkDocument, InsightItem};

use crate::error::ErrorCode;

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by data source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request is malformed (for example an empty bot id).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No bot with this id exists.
    #[error("unknown bot: {0}")]
    UnknownBot(String),

    /// The HTTP request to the search proxy failed.
    #[error("search proxy request failed: {0}")]
    Transport(String),

    /// The search proxy returned a non-success HTTP status.
    #[error("search proxy error: status {status}")]
    Upstream { status: u16, body: String },

    /// The search proxy response body could not be deserialized.
    #[error("search proxy response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "E_INVALID_REQUEST",
            Self::UnknownBot(_) => "E_UNKNOWN_BOT",
            Self::Transport(_) => "E_UPSTREAM_REQUEST",
            Self::Upstream { .. } => "E_UPSTREAM_RESPONSE",
            Self::Decode(_) => "E_UPSTREAM_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Upstream { status: 429 | 500..=599, .. })
    }
}

/// Reject an empty or whitespace-only bot id.
///
/// # Errors
///
/// Returns [`SourceError::InvalidRequest`] when `bot_id` is blank.
pub fn require_bot_id(bot_id: &str) -> Result<&str, SourceError> {
    let trimmed = bot_id.trim();
    if trimmed.is_empty() {
        return Err(SourceError::InvalidRequest("bot id must not be empty".into()));
    }
    Ok(trimmed)
}

// =============================================================================
// TRAIT
// =============================================================================

/// Read-only access to bots, their metrics, chunks and insights.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Ids of every known bot, in display order.
    ///
    /// # Errors
    ///
    /// Returns a transport or upstream error if the backend is unreachable.
    async fn list_bots(&self) -> Result<Vec<String>, SourceError>;

    /// Aggregate metrics for one bot, averages on the 0-10 scale.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty id, `UnknownBot` when the bot
    /// does not exist, or a backend error.
    async fn bot_metrics(&self, bot_id: &str) -> Result<BotMetrics, SourceError>;

    /// One page of chunks matching `filters`.
    ///
    /// # Errors
    ///
    /// Same as [`DataSource::bot_metrics`].
    async fn list_chunks(&self, filters: &ApiFilters) -> Result<Vec<ChunkDocument>, SourceError>;

    /// Rule-based recommendations for one bot.
    ///
    /// # Errors
    ///
    /// Same as [`DataSource::bot_metrics`].
    async fn insights(&self, bot_id: &str) -> Result<Vec<InsightItem>, SourceError>;
}
