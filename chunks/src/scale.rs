//! Conversion of aggregate averages onto the canonical 0-10 scale.
//!
//! Every `BotMetrics` that leaves a data source carries 0-10 averages. A
//! source whose backend reports fractions declares [`ScoreScale::Unit`] and
//! converts here; the scale is configuration, never inferred from values.

use crate::model::{BotMetrics, Dimension};

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

/// Scale an upstream reports its averages on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreScale {
    /// Fractions in `[0, 1]`.
    #[default]
    Unit,
    /// Scores in `[0, 10]`.
    Ten,
}

impl ScoreScale {
    /// Parse a configuration value (`unit` or `ten`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unit" | "fraction" => Some(Self::Unit),
            "ten" | "10" => Some(Self::Ten),
            _ => None,
        }
    }

    /// Convert one value to the 0-10 scale, clamped into range.
    #[must_use]
    pub fn to_ten(self, value: f64) -> f64 {
        let scaled = match self {
            Self::Unit => value * 10.0,
            Self::Ten => value,
        };
        if scaled.is_finite() { scaled.clamp(0.0, 10.0) } else { 0.0 }
    }

    /// Rewrite all five averages of `metrics` onto the 0-10 scale.
    #[must_use]
    pub fn normalize(self, mut metrics: BotMetrics) -> BotMetrics {
        for dimension in Dimension::ALL {
            let slot = metrics.average_mut(dimension);
            *slot = self.to_ten(*slot);
        }
        metrics
    }
}
