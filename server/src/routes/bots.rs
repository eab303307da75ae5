//! Bot, metrics, chunk and insight routes.
//!
//! Handlers translate HTTP to `DataSource` calls and back. Failures become a
//! JSON [`ErrorBody`] whose status follows the error kind.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use chunks::{ApiFilters, BotMetrics, ChunkDocument, InsightItem};

use crate::error::{ErrorBody, ErrorCode};
use crate::services::source::SourceError;
use crate::state::AppState;

#[cfg(test)]
#[path = "bots_test.rs"]
mod tests;

/// Route-level error: a data source failure rendered as JSON.
#[derive(Debug)]
pub struct ApiError(pub SourceError);

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(SourceError::InvalidRequest(rejection.body_text()))
    }
}

pub(crate) fn source_error_to_status(err: &SourceError) -> StatusCode {
    match err {
        SourceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        SourceError::UnknownBot(_) => StatusCode::NOT_FOUND,
        SourceError::Transport(_) | SourceError::Upstream { .. } | SourceError::Decode(_) => StatusCode::BAD_GATEWAY,
        SourceError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = source_error_to_status(&self.0);
        (status, Json(ErrorBody::from_error(&self.0))).into_response()
    }
}

fn log_failure(bot_id: &str, err: &SourceError) {
    tracing::warn!(
        bot_id = %bot_id,
        code = err.error_code(),
        retryable = err.retryable(),
        error = %err,
        "data source request failed"
    );
}

/// `GET /api/bots`: ids of every known bot.
pub async fn list_bots(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.source.list_bots().await.inspect_err(|e| log_failure("", e))?))
}

/// `GET /api/bots/:id/metrics`: aggregate metrics, averages on the 0-10 scale.
pub async fn bot_metrics(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> Result<Json<BotMetrics>, ApiError> {
    Ok(Json(state.source.bot_metrics(&bot_id).await.inspect_err(|e| log_failure(&bot_id, e))?))
}

/// `GET /api/bots/:id/chunks`: one page of chunks.
///
/// The query string carries the remaining `ApiFilters` fields; the bot id in
/// the path always wins over a `botId` parameter.
pub async fn list_chunks(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    query: Result<Query<ApiFilters>, QueryRejection>,
) -> Result<Json<Vec<ChunkDocument>>, ApiError> {
    let Query(mut filters) = query?;
    filters.bot_id = bot_id;
    filters.page_size = Some(filters.effective_page_size(state.default_page_size));

    let chunks = state.source.list_chunks(&filters).await.inspect_err(|e| {
        tracing::warn!(bot_id = %filters.bot_id, page = filters.effective_page(), error = %e, "list chunks failed");
    })?;
    Ok(Json(chunks))
}

/// `GET /api/bots/:id/insights`: rule-based recommendations.
pub async fn insights(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> Result<Json<Vec<InsightItem>>, ApiError> {
    Ok(Json(state.source.insights(&bot_id).await.inspect_err(|e| log_failure(&bot_id, e))?))
}
