//! Chunk ordering and the table's sort-header toggle.

use std::cmp::Ordering;

use crate::model::{ChunkDocument, SortDirection, SortKey};

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

/// Active sort column and direction of the chunk table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest evaluations first.
    fn default() -> Self {
        Self { key: SortKey::LastEvalTime, direction: SortDirection::Desc }
    }
}

impl SortConfig {
    /// Header click: flip direction on the active key, otherwise switch to
    /// `key` ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self { key, direction: self.direction.flipped() }
        } else {
            Self { key, direction: SortDirection::Asc }
        }
    }

    /// Direction indicator for a column header, if it is the active one.
    #[must_use]
    pub fn indicator(self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }
}

fn compare_by(key: SortKey, a: &ChunkDocument, b: &ChunkDocument) -> Ordering {
    match key {
        SortKey::DocName => a.source.doc_name.cmp(&b.source.doc_name),
        SortKey::Substantive => a.source.substantive.total_cmp(&b.source.substantive),
        SortKey::Cohesive => a.source.cohesive.total_cmp(&b.source.cohesive),
        // RFC 3339 timestamps in a single offset order lexicographically.
        SortKey::LastEvalTime => a.source.last_eval_time.cmp(&b.source.last_eval_time),
    }
}

/// Stable sort; ties keep their incoming order in both directions.
pub fn sort_chunks(chunks: &mut [ChunkDocument], key: SortKey, direction: SortDirection) {
    chunks.sort_by(|a, b| {
        let ord = compare_by(key, a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
