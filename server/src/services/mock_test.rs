use super::*;
use chunks::{SortDirection, SortKey};

fn filters(bot: &str) -> ApiFilters {
    ApiFilters::for_bot(bot)
}

#[tokio::test]
async fn lists_default_bots_in_order() {
    let source = MockSource::new();
    assert_eq!(source.list_bots().await.unwrap(), vec!["bot1", "bot2", "bot3", "bot4"]);
}

#[tokio::test]
async fn metrics_are_per_bot_and_stable() {
    let source = MockSource::new();
    let a = source.bot_metrics("bot1").await.unwrap();
    let b = source.bot_metrics("bot1").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.bot_id, "bot1");
    assert!(a.low_quality_chunks.is_some());
}

#[tokio::test]
async fn empty_bot_id_is_invalid() {
    let source = MockSource::new();
    assert!(matches!(source.bot_metrics("").await, Err(SourceError::InvalidRequest(_))));
    assert!(matches!(source.list_chunks(&filters(" ")).await, Err(SourceError::InvalidRequest(_))));
}

#[tokio::test]
async fn unknown_bot_is_reported() {
    let source = MockSource::new();
    let err = source.insights("bot9").await.unwrap_err();
    assert!(matches!(err, SourceError::UnknownBot(ref id) if id == "bot9"));
}

#[tokio::test]
async fn page_never_exceeds_page_size() {
    let source = MockSource::new();
    for size in [1, 5, 10, 25, 500] {
        let page = source
            .list_chunks(&ApiFilters { page_size: Some(size), ..filters("bot2") })
            .await
            .unwrap();
        assert!(page.len() <= size.min(chunks::model::MAX_PAGE_SIZE) as usize);
    }
}

#[tokio::test]
async fn default_page_is_first_ten_in_corpus_order() {
    let source = MockSource::new();
    let page = source.list_chunks(&filters("bot1")).await.unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].id, "chunk_1");
    assert_eq!(page[9].id, "chunk_10");
}

#[tokio::test]
async fn pages_are_contiguous_and_zero_means_first() {
    let source = MockSource::new();
    let first = source.list_chunks(&ApiFilters { page: Some(0), ..filters("bot1") }).await.unwrap();
    let second = source.list_chunks(&ApiFilters { page: Some(2), ..filters("bot1") }).await.unwrap();
    assert_eq!(first[0].id, "chunk_1");
    assert_eq!(second[0].id, "chunk_11");
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let source = MockSource::new();
    let page = source.list_chunks(&ApiFilters { page: Some(1000), ..filters("bot1") }).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn sorts_by_requested_key() {
    let source = MockSource::new();
    let page = source
        .list_chunks(&ApiFilters {
            sort_by: Some(SortKey::LastEvalTime),
            sort_direction: Some(SortDirection::Desc),
            page_size: Some(100),
            ..filters("bot3")
        })
        .await
        .unwrap();
    assert!(
        page.windows(2)
            .all(|w| w[0].source.last_eval_time >= w[1].source.last_eval_time)
    );
}

#[tokio::test]
async fn query_matches_document_name_case_insensitively() {
    let source = MockSource::new();
    let page = source
        .list_chunks(&ApiFilters { search_query: Some("  document_2.PDF ".into()), ..filters("bot1") })
        .await
        .unwrap();
    assert_eq!(page.len(), 3);
    assert!(page.iter().all(|c| c.source.doc_name == "Document_2.pdf"));
}

#[tokio::test]
async fn query_with_no_match_is_empty() {
    let source = MockSource::new();
    let page = source
        .list_chunks(&ApiFilters { search_query: Some("zebra crossing".into()), ..filters("bot1") })
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn metric_threshold_filters_on_mean_score() {
    let source = MockSource::new();
    let page = source
        .list_chunks(&ApiFilters { metric_threshold: Some(7.0), page_size: Some(100), ..filters("bot2") })
        .await
        .unwrap();
    assert!(page.iter().all(|c| c.source.eval_metrics.mean_score() >= 7.0));
}

#[tokio::test]
async fn insights_follow_metrics() {
    let source = MockSource::new();
    let metrics = source.bot_metrics("bot4").await.unwrap();
    let items = source.insights("bot4").await.unwrap();
    assert_eq!(items, chunks::insights::evaluate(&metrics));
    assert_eq!(items.len(), 5);
}

#[test]
fn with_bots_serves_only_named_bots() {
    let source = MockSource::with_bots(&["alpha"]);
    assert!(source.bot("alpha").is_ok());
    assert!(source.bot("bot1").is_err());
}
