//! Shared chunk-quality model and derivations for the dashboard.
//!
//! This crate owns the records exchanged between `server` and `client`
//! (chunk documents, bot metrics, insights, request filters) together with
//! the pure computations both sides need: gauge math, rating thresholds,
//! overview derivation, histograms, sort toggling, suggestion filtering and
//! insight rules. Nothing here performs I/O.

pub mod gauge;
pub mod histogram;
pub mod insights;
pub mod model;
pub mod overview;
pub mod rating;
pub mod scale;
pub mod sort;
pub mod suggest;

pub use model::{
    ApiFilters, BotMetrics, ChunkDocument, ChunkSource, Dimension, InsightItem, InsightKind, QualityMetrics,
    ScoreDistribution, SortDirection, SortKey,
};
