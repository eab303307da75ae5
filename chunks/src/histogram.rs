//! Chunk-size histogram over a page of chunk documents.
//!
//! The histogram is built from whatever chunks the caller holds, which for the
//! chunk table is the current page only. It approximates the corpus shape; it
//! is not a corpus-wide distribution.

use std::collections::BTreeMap;

use crate::model::ChunkDocument;

#[cfg(test)]
#[path = "histogram_test.rs"]
mod histogram_test;

/// Width of a size bucket in characters.
pub const SIZE_BUCKET_WIDTH: usize = 100;

/// Count of chunks whose length falls in `[size, size + SIZE_BUCKET_WIDTH)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeBucket {
    pub size: usize,
    pub count: u64,
}

/// Lower bound of the bucket a text of `chars` characters falls in.
#[must_use]
pub fn size_bucket(chars: usize) -> usize {
    chars / SIZE_BUCKET_WIDTH * SIZE_BUCKET_WIDTH
}

/// Bucket character lengths, ordered ascending by bucket key.
#[must_use]
pub fn size_histogram_from_lengths(lengths: impl IntoIterator<Item = usize>) -> Vec<SizeBucket> {
    let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
    for len in lengths {
        *counts.entry(size_bucket(len)).or_default() += 1;
    }
    counts.into_iter().map(|(size, count)| SizeBucket { size, count }).collect()
}

/// Bucket the texts of `chunks`.
#[must_use]
pub fn size_histogram(chunks: &[ChunkDocument]) -> Vec<SizeBucket> {
    size_histogram_from_lengths(chunks.iter().map(|c| c.source.char_len()))
}

/// Axis label for a bucket key, e.g. `1200 -> "1.2K"`.
#[must_use]
pub fn size_axis_label(size: usize) -> String {
    let k = size as f64 / 1000.0;
    let text = format!("{k:.1}");
    format!("{}K", text.strip_suffix(".0").unwrap_or(&text))
}

/// Size column label, e.g. `"0.5K chars"`.
#[must_use]
pub fn chunk_size_label(chars: usize) -> String {
    format!("{:.1}K chars", chars as f64 / 1000.0)
}
