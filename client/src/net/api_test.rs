use super::*;
use chunks::{SortDirection, SortKey};

#[test]
fn bot_endpoints_format_expected_paths() {
    assert_eq!(BOTS_ENDPOINT, "/api/bots");
    assert_eq!(bot_metrics_endpoint("bot2"), "/api/bots/bot2/metrics");
    assert_eq!(bot_chunks_endpoint("bot2"), "/api/bots/bot2/chunks");
    assert_eq!(bot_insights_endpoint("bot2"), "/api/bots/bot2/insights");
}

#[test]
fn chunk_query_pairs_use_camel_case_names() {
    let filters = ApiFilters {
        bot_id: "bot1".into(),
        search_query: Some("  vpn setup ".into()),
        metric_threshold: Some(6.5),
        sort_by: Some(SortKey::LastEvalTime),
        sort_direction: Some(SortDirection::Desc),
        page: Some(2),
        page_size: Some(10),
    };
    assert_eq!(
        chunk_query_pairs(&filters),
        [
            ("searchQuery", "vpn setup".to_owned()),
            ("metricThreshold", "6.5".to_owned()),
            ("sortBy", "last_eval_time".to_owned()),
            ("sortDirection", "desc".to_owned()),
            ("page", "2".to_owned()),
            ("pageSize", "10".to_owned()),
        ]
    );
}

#[test]
fn chunk_query_pairs_skip_absent_and_blank_fields() {
    let mut filters = ApiFilters::for_bot("bot1");
    assert!(chunk_query_pairs(&filters).is_empty());
    filters.search_query = Some("   ".into());
    assert!(chunk_query_pairs(&filters).is_empty());
}

#[test]
fn fetch_failed_message_includes_server_detail() {
    assert_eq!(fetch_failed_message("chunks", 502, None), "chunks fetch failed: 502");
    assert_eq!(fetch_failed_message("chunks", 404, Some("  ")), "chunks fetch failed: 404");
    assert_eq!(
        fetch_failed_message("metrics", 404, Some("unknown bot: bot9")),
        "metrics fetch failed: 404 (unknown bot: bot9)"
    );
}
