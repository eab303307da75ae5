use super::*;
use crate::model::ChunkSource;

fn doc(id: &str, name: &str, substantive: f64, evaluated: &str) -> ChunkDocument {
    ChunkDocument {
        id: id.into(),
        index: String::new(),
        score: 1.0,
        source: ChunkSource {
            doc_name: name.into(),
            substantive,
            cohesive: 1.0 - substantive,
            last_eval_time: evaluated.into(),
            ..ChunkSource::default()
        },
    }
}

fn ids(chunks: &[ChunkDocument]) -> Vec<&str> {
    chunks.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn default_sort_is_newest_first() {
    let cfg = SortConfig::default();
    assert_eq!(cfg.key, SortKey::LastEvalTime);
    assert_eq!(cfg.direction, SortDirection::Desc);
}

#[test]
fn toggling_active_key_flips_direction() {
    let cfg = SortConfig::default().toggled(SortKey::LastEvalTime);
    assert_eq!(cfg.direction, SortDirection::Asc);
    assert_eq!(cfg.toggled(SortKey::LastEvalTime).direction, SortDirection::Desc);
}

#[test]
fn toggling_other_key_starts_ascending() {
    let cfg = SortConfig::default().toggled(SortKey::DocName);
    assert_eq!(cfg, SortConfig { key: SortKey::DocName, direction: SortDirection::Asc });

    let desc = cfg.toggled(SortKey::DocName);
    let switched = desc.toggled(SortKey::Cohesive);
    assert_eq!(switched.direction, SortDirection::Asc);
}

#[test]
fn indicator_only_on_active_column() {
    let cfg = SortConfig::default();
    assert_eq!(cfg.indicator(SortKey::LastEvalTime), Some(SortDirection::Desc));
    assert_eq!(cfg.indicator(SortKey::DocName), None);
}

#[test]
fn sort_by_name_and_score() {
    let mut chunks = vec![
        doc("1", "Document_2.pdf", 0.7, "2025-05-01T00:00:00Z"),
        doc("2", "Document_1.pdf", 0.9, "2025-05-03T00:00:00Z"),
        doc("3", "Document_3.pdf", 0.8, "2025-05-02T00:00:00Z"),
    ];
    sort_chunks(&mut chunks, SortKey::DocName, SortDirection::Asc);
    assert_eq!(ids(&chunks), vec!["2", "1", "3"]);

    sort_chunks(&mut chunks, SortKey::Substantive, SortDirection::Desc);
    assert_eq!(ids(&chunks), vec!["2", "3", "1"]);

    sort_chunks(&mut chunks, SortKey::Cohesive, SortDirection::Asc);
    assert_eq!(ids(&chunks), vec!["2", "3", "1"]);

    sort_chunks(&mut chunks, SortKey::LastEvalTime, SortDirection::Asc);
    assert_eq!(ids(&chunks), vec!["1", "3", "2"]);
}

#[test]
fn sort_is_stable_for_ties() {
    let mut chunks = vec![
        doc("a", "Document_1.pdf", 0.5, "t"),
        doc("b", "Document_1.pdf", 0.5, "t"),
        doc("c", "Document_1.pdf", 0.5, "t"),
    ];
    sort_chunks(&mut chunks, SortKey::DocName, SortDirection::Desc);
    assert_eq!(ids(&chunks), vec!["a", "b", "c"]);
    sort_chunks(&mut chunks, SortKey::Substantive, SortDirection::Asc);
    assert_eq!(ids(&chunks), vec!["a", "b", "c"]);
}
