//! Chunk table model: inputs, sort, paging, selection and the detail modal.
//!
//! DESIGN
//! ======
//! The table refetches whenever bot, query, sort or page changes. Bot or
//! query changes go back to page 1; a sort change keeps the current page.
//! The first row of a non-empty load is auto-selected when nothing is
//! selected yet, and that row is handed back so the page controller learns
//! about it. The detail modal reuses the loaded document and never refetches.

use chunks::histogram::{SizeBucket, size_histogram};
use chunks::model::DEFAULT_PAGE_SIZE;
use chunks::sort::SortConfig;
use chunks::{ApiFilters, ChunkDocument, SortKey};

use super::fetch::FetchSlot;

#[cfg(test)]
#[path = "chunk_table_test.rs"]
mod chunk_table_test;

#[derive(Clone, Debug, PartialEq)]
pub struct ChunkTableState {
    pub bot_id: String,
    pub search_query: String,
    pub sort: SortConfig,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub chunks: FetchSlot<Vec<ChunkDocument>>,
    pub selected_id: Option<String>,
    pub detail_id: Option<String>,
}

impl Default for ChunkTableState {
    fn default() -> Self {
        Self {
            bot_id: String::new(),
            search_query: String::new(),
            sort: SortConfig::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            chunks: FetchSlot::default(),
            selected_id: None,
            detail_id: None,
        }
    }
}

impl ChunkTableState {
    /// Take new inputs from the page. Returns `true` if anything changed.
    pub fn set_inputs(&mut self, bot_id: &str, search_query: &str) -> bool {
        let bot_changed = self.bot_id != bot_id;
        let query_changed = self.search_query != search_query;
        if !bot_changed && !query_changed {
            return false;
        }
        if bot_changed {
            self.bot_id = bot_id.to_owned();
            self.selected_id = None;
            self.detail_id = None;
        }
        self.search_query = search_query.to_owned();
        self.page = 1;
        true
    }

    /// Sort-header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    /// Always possible: the API reports no total count.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn filters(&self) -> ApiFilters {
        let query = self.search_query.trim();
        ApiFilters {
            bot_id: self.bot_id.clone(),
            search_query: (!query.is_empty()).then(|| query.to_owned()),
            metric_threshold: None,
            sort_by: Some(self.sort.key),
            sort_direction: Some(self.sort.direction),
            page: Some(self.page),
            page_size: Some(self.page_size),
        }
    }

    /// Enter `loading` for the current inputs. `None` when no bot is set.
    pub fn begin_fetch(&mut self) -> Option<(u64, ApiFilters)> {
        if self.bot_id.is_empty() {
            return None;
        }
        Some((self.chunks.begin(), self.filters()))
    }

    /// Apply a chunk response. Returns the auto-selected first row, if this
    /// load selected one.
    pub fn apply(&mut self, ticket: u64, result: Result<Vec<ChunkDocument>, String>) -> Option<ChunkDocument> {
        if !self.chunks.resolve(ticket, result) || self.selected_id.is_some() {
            return None;
        }
        let first = self.rows().first()?.clone();
        self.selected_id = Some(first.id.clone());
        Some(first)
    }

    /// Rows of the current page; empty unless loaded.
    pub fn rows(&self) -> &[ChunkDocument] {
        self.chunks.state.data().map_or(&[], Vec::as_slice)
    }

    pub fn find(&self, id: &str) -> Option<&ChunkDocument> {
        self.rows().iter().find(|c| c.id == id)
    }

    /// Row activation: select the row and open its detail modal.
    pub fn activate(&mut self, id: &str) -> Option<ChunkDocument> {
        let chunk = self.find(id)?.clone();
        self.selected_id = Some(chunk.id.clone());
        self.detail_id = Some(chunk.id.clone());
        Some(chunk)
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
    }

    pub fn detail_chunk(&self) -> Option<&ChunkDocument> {
        self.detail_id.as_deref().and_then(|id| self.find(id))
    }

    /// 1-based row number across pages.
    pub fn row_number(&self, index: usize) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.page_size) + index as u64 + 1
    }

    /// Size histogram of the current page only.
    pub fn size_histogram(&self) -> Vec<SizeBucket> {
        size_histogram(self.rows())
    }
}
