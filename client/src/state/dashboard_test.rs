use super::*;
use crate::state::chunk_table::ChunkTableState;
use chunks::overview::LowQualityFigure;
use chunks::{ChunkSource, ScoreDistribution};

fn metrics(bot_id: &str, total: u64) -> BotMetrics {
    BotMetrics {
        bot_id: bot_id.to_owned(),
        total_chunks: total,
        avg_substantive: 8.2,
        avg_cohesive: 7.4,
        avg_completeness: 9.1,
        avg_low_noise: 6.4,
        avg_contextual_sufficiency: 7.6,
        scores_distribution: ScoreDistribution::default(),
        low_quality_chunks: None,
        last_evaluated: Some("2025-04-22T08:30:00.000Z".to_owned()),
    }
}

fn chunk(id: &str) -> ChunkDocument {
    ChunkDocument {
        id: id.to_owned(),
        index: "chunks".to_owned(),
        score: 1.0,
        source: ChunkSource { text: "How to reset the VPN client".to_owned(), ..ChunkSource::default() },
    }
}

fn bots() -> Vec<String> {
    ["bot1", "bot2", "bot3", "bot4"].map(str::to_owned).to_vec()
}

#[test]
fn tab_labels() {
    let labels: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Chunk Analysis", "Score Distribution", "Size Distribution"]);
    assert_eq!(DashboardTab::default(), DashboardTab::ChunkAnalysis);
}

#[test]
fn starts_with_no_bot() {
    let state = DashboardState::default();
    assert!(state.selected_bot.is_none());
    assert_eq!(state.bot_id(), "");
    assert!(state.overview().is_none());
}

#[test]
fn bot_list_selects_first_bot() {
    let mut state = DashboardState::default();
    let ticket = state.begin_bots();
    assert_eq!(state.adopt_bots(ticket, Ok(bots())).as_deref(), Some("bot1"));
    assert_eq!(state.bot_id(), "bot1");
}

#[test]
fn bot_list_keeps_existing_selection() {
    let mut state = DashboardState::default();
    state.select_bot("bot3");
    let ticket = state.begin_bots();
    assert!(state.adopt_bots(ticket, Ok(bots())).is_none());
    assert_eq!(state.bot_id(), "bot3");
}

#[test]
fn empty_or_failed_bot_list_selects_nothing() {
    let mut state = DashboardState::default();
    let ticket = state.begin_bots();
    assert!(state.adopt_bots(ticket, Ok(Vec::new())).is_none());
    let ticket = state.begin_bots();
    assert!(state.adopt_bots(ticket, Err("fetch failed: 500".into())).is_none());
    assert!(state.selected_bot.is_none());
    assert_eq!(state.bots.state.error(), Some("fetch failed: 500"));
}

#[test]
fn select_bot_ignores_blank_and_current() {
    let mut state = DashboardState::default();
    assert!(!state.select_bot("   "));
    assert!(state.select_bot(" bot2 "));
    assert_eq!(state.bot_id(), "bot2");
    assert!(!state.select_bot("bot2"));
}

#[test]
fn select_bot_clears_chunk_and_metrics() {
    let mut state = DashboardState::default();
    state.select_bot("bot1");
    let (ticket, _) = state.begin_metrics().unwrap();
    state.apply_metrics(ticket, Ok(metrics("bot1", 10)));
    state.select_chunk(chunk("chunk_1"));

    state.select_bot("bot2");
    assert!(state.selected_chunk.is_none());
    assert!(state.metrics.state.data().is_none());
}

#[test]
fn metrics_response_for_previous_bot_is_dropped() {
    let mut state = DashboardState::default();
    state.select_bot("bot1");
    let (stale, _) = state.begin_metrics().unwrap();
    state.select_bot("bot2");
    assert!(!state.apply_metrics(stale, Ok(metrics("bot1", 10))));
    assert!(state.overview().is_none());
}

#[test]
fn no_metrics_fetch_without_bot() {
    let mut state = DashboardState::default();
    assert!(state.begin_metrics().is_none());
}

#[test]
fn overview_derives_from_loaded_metrics() {
    let mut state = DashboardState::default();
    state.select_bot("bot1");
    let (ticket, _) = state.begin_metrics().unwrap();
    state.apply_metrics(ticket, Ok(metrics("bot1", 1254)));
    let overview = state.overview().unwrap();
    assert_eq!(overview.total_chunks, 1254);
    assert_eq!(overview.overall, 8);
    assert_eq!(overview.low_quality, LowQualityFigure::Estimated(50));
    assert_eq!(overview.last_updated.as_deref(), Some("22/04/2025"));
}

#[test]
fn submit_search_trims_and_reports_change() {
    let mut state = DashboardState::default();
    assert!(state.submit_search("  excel "));
    assert_eq!(state.search_query, "excel");
    assert!(!state.submit_search("excel"));
    assert!(state.submit_search(""));
    assert_eq!(state.search_query, "");
}

/// Drives the page controller and chunk table the way `IndexPage` wires
/// them: metrics first, then chunks, with the first chunk reported upward.
#[test]
fn selecting_bots_fetches_metrics_then_chunks() {
    let mut page = DashboardState::default();
    let mut table = ChunkTableState::default();
    let mut fetches: Vec<(&str, String)> = Vec::new();

    for bot in ["bot2", "bot3"] {
        assert!(page.select_bot(bot));
        assert!(page.selected_chunk.is_none());

        let (metrics_ticket, metrics_bot) = page.begin_metrics().unwrap();
        fetches.push(("metrics", metrics_bot));

        table.set_inputs(page.bot_id(), &page.search_query);
        let (chunk_ticket, filters) = table.begin_fetch().unwrap();
        fetches.push(("chunks", filters.bot_id.clone()));

        page.apply_metrics(metrics_ticket, Ok(metrics(bot, 3)));
        let rows = vec![chunk(&format!("{bot}_chunk_1")), chunk(&format!("{bot}_chunk_2"))];
        if let Some(first) = table.apply(chunk_ticket, Ok(rows)) {
            page.select_chunk(first);
        }

        let expected = format!("{bot}_chunk_1");
        assert_eq!(page.selected_chunk.as_ref().map(|c| c.id.as_str()), Some(expected.as_str()));
        assert_eq!(page.metrics.state.data().map(|m| m.bot_id.as_str()), Some(bot));
    }

    assert_eq!(
        fetches,
        [
            ("metrics", "bot2".to_owned()),
            ("chunks", "bot2".to_owned()),
            ("metrics", "bot3".to_owned()),
            ("chunks", "bot3".to_owned()),
        ]
    );
}
