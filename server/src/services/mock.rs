//! In-process data source backed by generated corpora.
//!
//! DESIGN
//! ======
//! Corpora and their aggregate metrics are built once in [`MockSource::new`]
//! and never mutated, so the source is shared across handlers without locks.
//! Chunk queries run filter, then sort, then offset pagination over a copy.

use std::collections::HashMap;

use chunks::insights;
use chunks::model::DEFAULT_PAGE_SIZE;
use chunks::sort::sort_chunks;
use chunks::{ApiFilters, BotMetrics, ChunkDocument, InsightItem};

use super::corpus;
use super::source::{DataSource, SourceError, require_bot_id};

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;

/// Bots served when no explicit list is given.
pub const DEFAULT_BOTS: [&str; 4] = ["bot1", "bot2", "bot3", "bot4"];

struct MockBot {
    chunks: Vec<ChunkDocument>,
    metrics: BotMetrics,
}

pub struct MockSource {
    order: Vec<String>,
    bots: HashMap<String, MockBot>,
}

impl MockSource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_bots(&DEFAULT_BOTS)
    }

    /// Build a source serving exactly `bot_ids`, in that order.
    #[must_use]
    pub fn with_bots(bot_ids: &[&str]) -> Self {
        let mut order = Vec::with_capacity(bot_ids.len());
        let mut bots = HashMap::with_capacity(bot_ids.len());
        for &id in bot_ids {
            let chunks = corpus::generate(id);
            let metrics = corpus::aggregate(id, &chunks);
            order.push(id.to_owned());
            bots.insert(id.to_owned(), MockBot { chunks, metrics });
        }
        Self { order, bots }
    }

    fn bot(&self, bot_id: &str) -> Result<&MockBot, SourceError> {
        let id = require_bot_id(bot_id)?;
        self.bots.get(id).ok_or_else(|| SourceError::UnknownBot(id.to_owned()))
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `chunk` matches the free-text query, case-insensitively, on its
/// text or document name.
fn matches_query(chunk: &ChunkDocument, needle_lower: &str) -> bool {
    chunk.source.text.to_lowercase().contains(needle_lower)
        || chunk.source.doc_name.to_lowercase().contains(needle_lower)
}

/// Apply `filters` to a corpus: query and threshold filtering, optional
/// stable sort, then one page.
#[must_use]
pub fn select_page(corpus: &[ChunkDocument], filters: &ApiFilters) -> Vec<ChunkDocument> {
    let needle = filters.query().map(str::to_lowercase);
    let mut selected: Vec<ChunkDocument> = corpus
        .iter()
        .filter(|chunk| needle.as_deref().is_none_or(|n| matches_query(chunk, n)))
        .filter(|chunk| {
            filters
                .metric_threshold
                .is_none_or(|min| chunk.source.eval_metrics.mean_score() >= min)
        })
        .cloned()
        .collect();

    if let Some(key) = filters.sort_by {
        sort_chunks(&mut selected, key, filters.sort_direction.unwrap_or_default());
    }

    let page_size = filters.effective_page_size(DEFAULT_PAGE_SIZE) as usize;
    selected
        .into_iter()
        .skip(filters.offset(DEFAULT_PAGE_SIZE))
        .take(page_size)
        .collect()
}

#[async_trait::async_trait]
impl DataSource for MockSource {
    async fn list_bots(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.order.clone())
    }

    async fn bot_metrics(&self, bot_id: &str) -> Result<BotMetrics, SourceError> {
        Ok(self.bot(bot_id)?.metrics.clone())
    }

    async fn list_chunks(&self, filters: &ApiFilters) -> Result<Vec<ChunkDocument>, SourceError> {
        let bot = self.bot(&filters.bot_id)?;
        Ok(select_page(&bot.chunks, filters))
    }

    async fn insights(&self, bot_id: &str) -> Result<Vec<InsightItem>, SourceError> {
        Ok(insights::evaluate(&self.bot(bot_id)?.metrics))
    }
}
