use super::*;

fn sample_metrics() -> QualityMetrics {
    QualityMetrics {
        cohesion_score: 9,
        low_noise_score: 9,
        completeness_score: 7,
        substantiveness_score: 8,
        contextual_sufficiency_score: 8,
        coherent_reason: "logical sequence".into(),
        noise_reason: "focused".into(),
        complete_reason: "missing final step".into(),
        substantive_reason: "actionable".into(),
        context_reason: "mostly standalone".into(),
    }
}

#[test]
fn chunk_document_uses_index_field_names() {
    let json = serde_json::json!({
        "_id": "8slsaZYBwUk7OXhO2LW2",
        "_index": "documents_v2",
        "_score": 1.0,
        "_source": {
            "text": "hello",
            "doc_name": "KB.pdf",
            "substantive": 0.85,
            "cohesive": 0.72,
            "last_eval_time": "2025-05-01T21:42:14.121Z",
            "eval_metrics": { "cohesion_score": 9, "coherent_reason": "ok" }
        }
    });
    let doc: ChunkDocument = serde_json::from_value(json).unwrap();
    assert_eq!(doc.id, "8slsaZYBwUk7OXhO2LW2");
    assert_eq!(doc.index, "documents_v2");
    assert_eq!(doc.source.doc_name, "KB.pdf");
    assert_eq!(doc.source.eval_metrics.cohesion_score, 9);
    assert_eq!(doc.source.eval_metrics.noise_reason, "");
    assert_eq!(doc.source.question, "");

    let back = serde_json::to_value(&doc).unwrap();
    assert!(back.get("_source").is_some());
    assert!(back.get("source").is_none());
}

#[test]
fn char_len_counts_characters_not_bytes() {
    let source = ChunkSource { text: "KBID – 14".into(), ..ChunkSource::default() };
    assert_eq!(source.char_len(), 9);
}

#[test]
fn dimensions_follow_canonical_order() {
    let m = sample_metrics();
    let dims = m.dimensions();
    assert_eq!(dims[0], (Dimension::Cohesion, 9, "logical sequence"));
    assert_eq!(dims[2], (Dimension::Completeness, 7, "missing final step"));
    assert_eq!(dims[4], (Dimension::ContextualSufficiency, 8, "mostly standalone"));
}

#[test]
fn clamped_bounds_scores() {
    let m = QualityMetrics { cohesion_score: 0, low_noise_score: 14, ..sample_metrics() };
    let c = m.clamped();
    assert_eq!(c.cohesion_score, 1);
    assert_eq!(c.low_noise_score, 10);
    assert_eq!(c.completeness_score, 7);
    assert_eq!(c.coherent_reason, "logical sequence");
}

#[test]
fn mean_score_is_unweighted() {
    assert!((sample_metrics().mean_score() - 8.2).abs() < 1e-9);
}

#[test]
fn short_label_abbreviates_context() {
    assert_eq!(Dimension::ContextualSufficiency.short_label(), "Context");
    assert_eq!(Dimension::LowNoise.short_label(), "Low Noise");
}

#[test]
fn distribution_record_and_count_below() {
    let mut dist = ScoreDistribution::default();
    dist.record(Dimension::Completeness, 3);
    dist.record(Dimension::Completeness, 6);
    dist.record(Dimension::Completeness, 7);
    dist.record(Dimension::Completeness, 12);
    assert_eq!(dist.completeness, [0, 0, 1, 0, 0, 1, 1, 0, 0, 1]);
    assert_eq!(dist.count_below(Dimension::Completeness, 7), 2);
    assert_eq!(dist.count_below(Dimension::Completeness, 1), 0);
    assert_eq!(dist.count_below(Dimension::Completeness, 11), 4);
    assert_eq!(dist.total(Dimension::Completeness), 4);
}

#[test]
fn distribution_rows_cover_scores_one_to_ten() {
    let dist = ScoreDistribution {
        cohesion: [32, 67, 120, 210, 305, 240, 160, 80, 35, 5],
        low_noise: [15, 40, 85, 150, 250, 320, 230, 110, 44, 10],
        ..ScoreDistribution::default()
    };
    let rows = dist.rows();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].score, 1);
    assert_eq!(rows[9].score, 10);
    assert_eq!(rows[4].counts, [305, 250, 0, 0, 0]);
    assert_eq!(dist.max_bucket(), 320);
}

#[test]
fn distribution_rejects_wrong_bucket_count() {
    let json = serde_json::json!({
        "cohesion": [1, 2, 3],
        "lowNoise": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        "completeness": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        "substantiveness": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        "contextualSufficiency": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    });
    assert!(serde_json::from_value::<ScoreDistribution>(json).is_err());
}

#[test]
fn insight_kind_unknown_tag_reads_as_info() {
    let item: InsightItem = serde_json::from_value(serde_json::json!({
        "type": "critical",
        "metric": "Completeness",
        "message": "m",
        "affectedChunks": 3,
        "recommendation": "r"
    }))
    .unwrap();
    assert_eq!(item.kind, InsightKind::Info);
    assert_eq!(serde_json::to_value(InsightKind::Warning).unwrap(), "warning");
}

#[test]
fn filters_page_defaults_and_bounds() {
    let mut f = ApiFilters::for_bot("bot1");
    assert_eq!(f.effective_page(), 1);
    assert_eq!(f.effective_page_size(DEFAULT_PAGE_SIZE), 10);
    assert_eq!(f.offset(DEFAULT_PAGE_SIZE), 0);

    f.page = Some(0);
    assert_eq!(f.effective_page(), 1);

    f.page = Some(3);
    f.page_size = Some(500);
    assert_eq!(f.effective_page_size(DEFAULT_PAGE_SIZE), MAX_PAGE_SIZE);
    assert_eq!(f.offset(DEFAULT_PAGE_SIZE), 200);
}

#[test]
fn filters_blank_query_is_none() {
    let mut f = ApiFilters::for_bot("bot1");
    f.search_query = Some("   ".into());
    assert_eq!(f.query(), None);
    f.search_query = Some(" excel ".into());
    assert_eq!(f.query(), Some("excel"));
}

#[test]
fn filters_serialize_camel_case_and_skip_empty() {
    let f = ApiFilters {
        bot_id: "bot2".into(),
        sort_by: Some(SortKey::LastEvalTime),
        sort_direction: Some(SortDirection::Desc),
        page: Some(1),
        page_size: Some(10),
        ..ApiFilters::default()
    };
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "botId": "bot2",
            "sortBy": "last_eval_time",
            "sortDirection": "desc",
            "page": 1,
            "pageSize": 10
        })
    );
}
