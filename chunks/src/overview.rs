//! Derived figures for the metrics overview cards and meters.
//!
//! DESIGN
//! ======
//! Averages arrive on the 0-10 scale. Each is rounded to a whole number for
//! display, and the overall quality is the rounded mean of those rounded
//! values, so the headline figure always agrees with the five meters beside
//! it. The low-quality figure prefers a measured count from the data source
//! and otherwise falls back to a fixed-rate placeholder that is tagged as an
//! estimate so the UI can say so.

use crate::model::{BotMetrics, Dimension};
use crate::rating::QualityRating;

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

/// Share of the corpus assumed low quality when no measured count exists.
pub const LOW_QUALITY_ESTIMATE_RATE: f64 = 0.04;

/// Mean chunk score below which a chunk counts as low quality.
pub const LOW_QUALITY_MEAN_THRESHOLD: f64 = 5.0;

/// Round a 0-10 average to the whole number shown on a meter.
#[must_use]
pub fn round_score(average: f64) -> i64 {
    if !average.is_finite() {
        return 0;
    }
    average.round() as i64
}

/// Rounded unweighted mean of already-rounded scores.
#[must_use]
pub fn overall_quality(rounded: &[i64]) -> i64 {
    if rounded.is_empty() {
        return 0;
    }
    let sum: i64 = rounded.iter().sum();
    (sum as f64 / rounded.len() as f64).round() as i64
}

/// Placeholder low-quality count: a fixed share of the total.
#[must_use]
pub fn estimate_low_quality(total_chunks: u64) -> u64 {
    (total_chunks as f64 * LOW_QUALITY_ESTIMATE_RATE).round() as u64
}

/// Low-quality chunk count together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LowQualityFigure {
    /// Counted by the data source from per-chunk scores.
    Measured(u64),
    /// Placeholder derived from [`LOW_QUALITY_ESTIMATE_RATE`].
    Estimated(u64),
}

impl LowQualityFigure {
    #[must_use]
    pub fn count(self) -> u64 {
        match self {
            Self::Measured(n) | Self::Estimated(n) => n,
        }
    }

    #[must_use]
    pub fn is_estimate(self) -> bool {
        matches!(self, Self::Estimated(_))
    }

    /// Share of `total` as a one-decimal percentage string, e.g. `"4.0%"`.
    #[must_use]
    pub fn share_label(self, total: u64) -> String {
        if total == 0 {
            return "0.0%".to_owned();
        }
        format!("{:.1}%", self.count() as f64 / total as f64 * 100.0)
    }
}

/// One meter on the overview row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeterFigure {
    pub dimension: Dimension,
    pub rounded: i64,
    pub rating: QualityRating,
}

/// Everything the overview renders for one bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overview {
    pub total_chunks: u64,
    pub meters: Vec<MeterFigure>,
    pub overall: i64,
    pub overall_rating: QualityRating,
    pub low_quality: LowQualityFigure,
    pub last_updated: Option<String>,
}

impl Overview {
    #[must_use]
    pub fn from_metrics(metrics: &BotMetrics) -> Self {
        let meters: Vec<MeterFigure> = Dimension::ALL
            .iter()
            .map(|d| {
                let rounded = round_score(metrics.average(*d));
                MeterFigure { dimension: *d, rounded, rating: QualityRating::from_score(rounded as f64) }
            })
            .collect();
        let rounded: Vec<i64> = meters.iter().map(|m| m.rounded).collect();
        let overall = overall_quality(&rounded);
        let low_quality = match metrics.low_quality_chunks {
            Some(n) => LowQualityFigure::Measured(n),
            None => LowQualityFigure::Estimated(estimate_low_quality(metrics.total_chunks)),
        };

        Self {
            total_chunks: metrics.total_chunks,
            meters,
            overall,
            overall_rating: QualityRating::from_score(overall as f64),
            low_quality,
            last_updated: metrics.last_evaluated.as_deref().and_then(day_month_year),
        }
    }
}

/// Reformat the date part of an RFC 3339 timestamp as `dd/mm/yyyy`.
#[must_use]
pub fn day_month_year(timestamp: &str) -> Option<String> {
    let date = timestamp.get(..10)?;
    let mut parts = date.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    let numeric = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(year, 4) || !numeric(month, 2) || !numeric(day, 2) {
        return None;
    }
    Some(format!("{day}/{month}/{year}"))
}

/// Thousands-separated integer, e.g. `1,254`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
