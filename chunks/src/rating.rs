//! Qualitative labels for numeric scores.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

/// Five-step rating shown under each overview meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityRating {
    Excellent,
    Good,
    Average,
    Fair,
    Poor,
}

impl QualityRating {
    /// Rating for a 0-10 score: >=9 excellent, >=7 good, >=5 average, >=3 fair.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else if score >= 5.0 {
            Self::Average
        } else if score >= 3.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Three-step badge shown on chunk table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityBadge {
    High,
    Medium,
    Low,
}

impl QualityBadge {
    /// Badge for a 0-10 score: >=8 high, >=5 medium, otherwise low.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::High
        } else if score >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// BEM modifier used by the badge stylesheet.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::High => "badge--high",
            Self::Medium => "badge--medium",
            Self::Low => "badge--low",
        }
    }
}
