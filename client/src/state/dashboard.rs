//! Page-level dashboard state: bot selection, search query, selected chunk.
//!
//! DESIGN
//! ======
//! `IndexPage` owns one `RwSignal<DashboardState>` and provides it as
//! context. Children receive the current bot and query as inputs and report
//! selections back through callbacks that land here. The bot metrics fetch
//! lives here because the overview cards and the score histogram share it;
//! chunks and insights are fetched by the components that render them.

use chunks::overview::Overview;
use chunks::{BotMetrics, ChunkDocument};

use super::fetch::FetchSlot;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Tabs of the main panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    ChunkAnalysis,
    ScoreDistribution,
    SizeDistribution,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::ChunkAnalysis, Self::ScoreDistribution, Self::SizeDistribution];

    pub fn label(self) -> &'static str {
        match self {
            Self::ChunkAnalysis => "Chunk Analysis",
            Self::ScoreDistribution => "Score Distribution",
            Self::SizeDistribution => "Size Distribution",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub bots: FetchSlot<Vec<String>>,
    pub selected_bot: Option<String>,
    pub search_query: String,
    pub selected_chunk: Option<ChunkDocument>,
    pub tab: DashboardTab,
    pub metrics: FetchSlot<BotMetrics>,
}

impl DashboardState {
    /// Selected bot id, or `""` when none is selected.
    pub fn bot_id(&self) -> &str {
        self.selected_bot.as_deref().unwrap_or_default()
    }

    pub fn begin_bots(&mut self) -> u64 {
        self.bots.begin()
    }

    /// Apply the bot list. Selects the first bot if none is selected yet and
    /// returns it.
    pub fn adopt_bots(&mut self, ticket: u64, result: Result<Vec<String>, String>) -> Option<String> {
        if !self.bots.resolve(ticket, result) || self.selected_bot.is_some() {
            return None;
        }
        let first = self.bots.state.data()?.first()?.clone();
        self.select_bot(&first);
        Some(first)
    }

    /// Switch bots. Clears the selected chunk and drops the previous bot's
    /// metrics. Returns `false` for a blank id or the current bot.
    pub fn select_bot(&mut self, bot_id: &str) -> bool {
        let bot_id = bot_id.trim();
        if bot_id.is_empty() || self.selected_bot.as_deref() == Some(bot_id) {
            return false;
        }
        self.selected_bot = Some(bot_id.to_owned());
        self.selected_chunk = None;
        self.metrics.reset();
        true
    }

    /// Search form submit. Returns `true` if the query changed.
    pub fn submit_search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if self.search_query == query {
            return false;
        }
        query.clone_into(&mut self.search_query);
        true
    }

    pub fn select_chunk(&mut self, chunk: ChunkDocument) {
        self.selected_chunk = Some(chunk);
    }

    /// Enter `loading` for the selected bot's metrics.
    pub fn begin_metrics(&mut self) -> Option<(u64, String)> {
        let bot_id = self.selected_bot.clone()?;
        Some((self.metrics.begin(), bot_id))
    }

    pub fn apply_metrics(&mut self, ticket: u64, result: Result<BotMetrics, String>) -> bool {
        self.metrics.resolve(ticket, result)
    }

    pub fn overview(&self) -> Option<Overview> {
        self.metrics.state.data().map(Overview::from_metrics)
    }
}
