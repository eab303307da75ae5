//! Rule-based recommendations derived from a bot's score distribution.
//!
//! DESIGN
//! ======
//! One rule per dimension names a score threshold. The share of chunks below
//! it picks the classification: at least [`WARNING_SHARE`] is a warning, at
//! least [`INFO_SHARE`] is informational, anything less is reported as a
//! success counting the chunks at or above the threshold. Output is ordered
//! warnings, infos, successes; rule order breaks ties.

use crate::model::{BotMetrics, Dimension, InsightItem, InsightKind};

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

/// Share of low-scoring chunks that raises a warning.
pub const WARNING_SHARE: f64 = 0.05;
/// Share of low-scoring chunks that raises an informational note.
pub const INFO_SHARE: f64 = 0.02;

struct InsightRule {
    dimension: Dimension,
    threshold: u8,
    low_message: &'static str,
    low_recommendation: &'static str,
    ok_message: &'static str,
    ok_recommendation: &'static str,
}

const RULES: [InsightRule; 5] = [
    InsightRule {
        dimension: Dimension::Completeness,
        threshold: 7,
        low_message: "Several chunks have incomplete information",
        low_recommendation: "Review chunks with completeness scores below 7 and consider expanding the content or merging with related chunks.",
        ok_message: "Most chunks carry complete information",
        ok_recommendation: "Keep the current chunk boundaries for procedural content.",
    },
    InsightRule {
        dimension: Dimension::LowNoise,
        threshold: 6,
        low_message: "Some chunks contain distracting or irrelevant content",
        low_recommendation: "Strip boilerplate such as headers, footers and navigation text before chunking.",
        ok_message: "Most chunks have minimal noise",
        ok_recommendation: "Maintain current chunking strategy for noise control.",
    },
    InsightRule {
        dimension: Dimension::ContextualSufficiency,
        threshold: 6,
        low_message: "Some chunks lack sufficient context",
        low_recommendation: "Consider adjusting chunk size or including more contextual information for self-contained understanding.",
        ok_message: "Most chunks are understandable on their own",
        ok_recommendation: "Keep section headings attached to each chunk.",
    },
    InsightRule {
        dimension: Dimension::Substantiveness,
        threshold: 6,
        low_message: "Several chunks contain low information density",
        low_recommendation: "Review chunks with substantiveness scores below 6 to ensure they contribute meaningful information.",
        ok_message: "Most chunks carry substantive content",
        ok_recommendation: "No change needed to information density.",
    },
    InsightRule {
        dimension: Dimension::Cohesion,
        threshold: 5,
        low_message: "Some chunks mix unrelated topics",
        low_recommendation: "Split chunks at topic boundaries so each one covers a single idea.",
        ok_message: "Most chunks follow a logical flow",
        ok_recommendation: "Keep splitting on structural boundaries such as headings and numbered steps.",
    },
];

fn classify(share: f64) -> InsightKind {
    if share >= WARNING_SHARE {
        InsightKind::Warning
    } else if share >= INFO_SHARE {
        InsightKind::Info
    } else {
        InsightKind::Success
    }
}

/// Evaluate every rule against `metrics`. A bot with no scored chunks yields
/// no insights.
#[must_use]
pub fn evaluate(metrics: &BotMetrics) -> Vec<InsightItem> {
    let dist = &metrics.scores_distribution;
    let mut items: Vec<InsightItem> = RULES
        .iter()
        .filter_map(|rule| {
            let population = dist.total(rule.dimension);
            if population == 0 {
                return None;
            }
            let low = dist.count_below(rule.dimension, rule.threshold);
            let kind = classify(low as f64 / population as f64);
            let item = match kind {
                InsightKind::Success => InsightItem {
                    kind,
                    metric: rule.dimension.label().to_owned(),
                    message: rule.ok_message.to_owned(),
                    affected_chunks: population - low,
                    recommendation: rule.ok_recommendation.to_owned(),
                },
                InsightKind::Warning | InsightKind::Info => InsightItem {
                    kind,
                    metric: rule.dimension.label().to_owned(),
                    message: rule.low_message.to_owned(),
                    affected_chunks: low,
                    recommendation: rule.low_recommendation.to_owned(),
                },
            };
            Some(item)
        })
        .collect();
    items.sort_by_key(|item| item.kind.priority());
    items
}

/// Visual treatment of an insight card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsightStyle {
    /// Colour family: amber, green or blue.
    pub tone: &'static str,
    pub css_modifier: &'static str,
    pub icon: &'static str,
}

#[must_use]
pub fn insight_style(kind: InsightKind) -> InsightStyle {
    match kind {
        InsightKind::Warning => InsightStyle { tone: "amber", css_modifier: "insight--warning", icon: "⚠" },
        InsightKind::Success => InsightStyle { tone: "green", css_modifier: "insight--success", icon: "✓" },
        InsightKind::Info => InsightStyle { tone: "blue", css_modifier: "insight--info", icon: "ℹ" },
    }
}
