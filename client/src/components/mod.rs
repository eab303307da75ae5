//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the current bot and query as inputs, fetch the data
//! they render, and report selections to the page through callbacks.

pub mod actionable_insights;
pub mod bot_search;
pub mod bot_selector;
pub mod chunk_detail;
pub mod chunk_quality_chart;
pub mod chunk_size_histogram;
pub mod chunk_table;
pub mod circular_meter;
pub mod dashboard_header;
pub mod metric_histogram;
pub mod metrics_overview;
pub mod quality_metric_card;
