//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the configured data source behind an `Arc` so cloning per request
//! is cheap, plus the page size applied when a chunk request names none.

use std::sync::Arc;

use crate::services::source::DataSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub default_page_size: u32,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>, default_page_size: u32) -> Self {
        Self { source, default_page_size }
    }

    /// State over the generated in-process corpus.
    #[cfg(test)]
    #[must_use]
    pub fn mock() -> Self {
        Self::new(Arc::new(crate::services::mock::MockSource::new()), chunks::model::DEFAULT_PAGE_SIZE)
    }
}
