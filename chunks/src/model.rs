//! Wire records shared by the data access layer and the UI.
//!
//! Chunk documents keep the field names of the upstream search index
//! (`_id`, `_source`, snake_case source fields). Aggregate records
//! (`BotMetrics`, `InsightItem`, `ApiFilters`) use camelCase.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Lowest score a quality dimension can carry.
pub const MIN_SCORE: u8 = 1;
/// Highest score a quality dimension can carry.
pub const MAX_SCORE: u8 = 10;
/// Number of buckets in every score-distribution series.
pub const SCORE_BUCKETS: usize = 10;
/// Page size used when a request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page a single chunk request may ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// DIMENSIONS
// =============================================================================

/// One of the five scored quality dimensions of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Cohesion,
    LowNoise,
    Completeness,
    Substantiveness,
    ContextualSufficiency,
}

impl Dimension {
    /// Canonical display order.
    pub const ALL: [Self; 5] =
        [Self::Cohesion, Self::LowNoise, Self::Completeness, Self::Substantiveness, Self::ContextualSufficiency];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cohesion => "Cohesion",
            Self::LowNoise => "Low Noise",
            Self::Completeness => "Completeness",
            Self::Substantiveness => "Substantiveness",
            Self::ContextualSufficiency => "Contextual Sufficiency",
        }
    }

    /// Compact label used on chart axes.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::ContextualSufficiency => "Context",
            other => other.label(),
        }
    }

    /// Label of the rationale paragraph in the detail view.
    #[must_use]
    pub fn reason_label(self) -> &'static str {
        match self {
            Self::Cohesion => "Coherent",
            Self::LowNoise => "Noise",
            Self::Completeness => "Complete",
            Self::Substantiveness => "Substantive",
            Self::ContextualSufficiency => "Context",
        }
    }
}

// =============================================================================
// CHUNK DOCUMENT
// =============================================================================

/// A chunk as returned by the search index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_score", default)]
    pub score: f64,
    #[serde(rename = "_source")]
    pub source: ChunkSource,
}

/// Indexed payload of a chunk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSource {
    pub question: String,
    pub parser_type: String,
    pub answer: String,
    pub doc_type: String,
    pub page_numbers: Vec<u32>,
    pub text: String,
    pub query_question: String,
    pub doc_name: String,
    pub pg_num: u32,
    pub paragraph_id: String,
    pub document_source: String,
    pub eval_metrics: QualityMetrics,
    /// Summary substantiveness in [0, 1].
    pub substantive: f64,
    /// Summary cohesiveness in [0, 1].
    pub cohesive: f64,
    /// RFC 3339 timestamp of the last evaluation run.
    pub last_eval_time: String,
}

impl ChunkSource {
    /// Length of the chunk text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Per-chunk evaluation: five scores in `[1, 10]`, each with a rationale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityMetrics {
    pub cohesion_score: u8,
    pub low_noise_score: u8,
    pub completeness_score: u8,
    pub substantiveness_score: u8,
    pub contextual_sufficiency_score: u8,
    pub coherent_reason: String,
    pub noise_reason: String,
    pub complete_reason: String,
    pub substantive_reason: String,
    pub context_reason: String,
}

impl Default for QualityMetrics {
    fn default() -> Self {
        Self {
            cohesion_score: MIN_SCORE,
            low_noise_score: MIN_SCORE,
            completeness_score: MIN_SCORE,
            substantiveness_score: MIN_SCORE,
            contextual_sufficiency_score: MIN_SCORE,
            coherent_reason: String::new(),
            noise_reason: String::new(),
            complete_reason: String::new(),
            substantive_reason: String::new(),
            context_reason: String::new(),
        }
    }
}

impl QualityMetrics {
    #[must_use]
    pub fn score(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Cohesion => self.cohesion_score,
            Dimension::LowNoise => self.low_noise_score,
            Dimension::Completeness => self.completeness_score,
            Dimension::Substantiveness => self.substantiveness_score,
            Dimension::ContextualSufficiency => self.contextual_sufficiency_score,
        }
    }

    #[must_use]
    pub fn reason(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Cohesion => &self.coherent_reason,
            Dimension::LowNoise => &self.noise_reason,
            Dimension::Completeness => &self.complete_reason,
            Dimension::Substantiveness => &self.substantive_reason,
            Dimension::ContextualSufficiency => &self.context_reason,
        }
    }

    /// The five `(dimension, score, rationale)` triples in canonical order.
    #[must_use]
    pub fn dimensions(&self) -> [(Dimension, u8, &str); 5] {
        Dimension::ALL.map(|d| (d, self.score(d), self.reason(d)))
    }

    /// Copy with every score forced into `[1, 10]`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let clamp = |s: u8| s.clamp(MIN_SCORE, MAX_SCORE);
        Self {
            cohesion_score: clamp(self.cohesion_score),
            low_noise_score: clamp(self.low_noise_score),
            completeness_score: clamp(self.completeness_score),
            substantiveness_score: clamp(self.substantiveness_score),
            contextual_sufficiency_score: clamp(self.contextual_sufficiency_score),
            ..self.clone()
        }
    }

    /// Unweighted mean of the five scores.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        let sum: u32 = Dimension::ALL.iter().map(|d| u32::from(self.score(*d))).sum();
        f64::from(sum) / Dimension::ALL.len() as f64
    }
}

// =============================================================================
// BOT METRICS
// =============================================================================

/// Aggregate view of one bot's corpus. Averages are on the 0-10 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotMetrics {
    pub bot_id: String,
    pub total_chunks: u64,
    pub avg_substantive: f64,
    pub avg_cohesive: f64,
    pub avg_completeness: f64,
    pub avg_low_noise: f64,
    pub avg_contextual_sufficiency: f64,
    pub scores_distribution: ScoreDistribution,
    /// Measured count of low-quality chunks, when the source can provide one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_quality_chunks: Option<u64>,
    /// Newest evaluation timestamp across the corpus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated: Option<String>,
}

impl BotMetrics {
    #[must_use]
    pub fn average(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cohesion => self.avg_cohesive,
            Dimension::LowNoise => self.avg_low_noise,
            Dimension::Completeness => self.avg_completeness,
            Dimension::Substantiveness => self.avg_substantive,
            Dimension::ContextualSufficiency => self.avg_contextual_sufficiency,
        }
    }

    pub fn average_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Cohesion => &mut self.avg_cohesive,
            Dimension::LowNoise => &mut self.avg_low_noise,
            Dimension::Completeness => &mut self.avg_completeness,
            Dimension::Substantiveness => &mut self.avg_substantive,
            Dimension::ContextualSufficiency => &mut self.avg_contextual_sufficiency,
        }
    }
}

/// Per-dimension histograms; bucket `i` counts chunks that scored `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub cohesion: [u64; SCORE_BUCKETS],
    pub low_noise: [u64; SCORE_BUCKETS],
    pub completeness: [u64; SCORE_BUCKETS],
    pub substantiveness: [u64; SCORE_BUCKETS],
    pub contextual_sufficiency: [u64; SCORE_BUCKETS],
}

/// One score value across all five dimension histograms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    pub score: u8,
    pub counts: [u64; 5],
}

impl ScoreDistribution {
    #[must_use]
    pub fn series(&self, dimension: Dimension) -> &[u64; SCORE_BUCKETS] {
        match dimension {
            Dimension::Cohesion => &self.cohesion,
            Dimension::LowNoise => &self.low_noise,
            Dimension::Completeness => &self.completeness,
            Dimension::Substantiveness => &self.substantiveness,
            Dimension::ContextualSufficiency => &self.contextual_sufficiency,
        }
    }

    fn series_mut(&mut self, dimension: Dimension) -> &mut [u64; SCORE_BUCKETS] {
        match dimension {
            Dimension::Cohesion => &mut self.cohesion,
            Dimension::LowNoise => &mut self.low_noise,
            Dimension::Completeness => &mut self.completeness,
            Dimension::Substantiveness => &mut self.substantiveness,
            Dimension::ContextualSufficiency => &mut self.contextual_sufficiency,
        }
    }

    /// Count one chunk's score for a dimension. Out-of-range scores are clamped.
    pub fn record(&mut self, dimension: Dimension, score: u8) {
        let bucket = usize::from(score.clamp(MIN_SCORE, MAX_SCORE) - MIN_SCORE);
        self.series_mut(dimension)[bucket] += 1;
    }

    /// Count every dimension of one chunk.
    pub fn record_all(&mut self, metrics: &QualityMetrics) {
        for (dimension, score, _) in metrics.dimensions() {
            self.record(dimension, score);
        }
    }

    /// Number of chunks scoring strictly below `threshold` on a dimension.
    #[must_use]
    pub fn count_below(&self, dimension: Dimension, threshold: u8) -> u64 {
        let cut = usize::from(threshold.saturating_sub(MIN_SCORE)).min(SCORE_BUCKETS);
        self.series(dimension)[..cut].iter().sum()
    }

    #[must_use]
    pub fn total(&self, dimension: Dimension) -> u64 {
        self.series(dimension).iter().sum()
    }

    /// Ten rows, score 1 through 10, with the five counts in canonical order.
    #[must_use]
    pub fn rows(&self) -> Vec<ScoreRow> {
        (0..SCORE_BUCKETS)
            .map(|i| ScoreRow { score: i as u8 + MIN_SCORE, counts: Dimension::ALL.map(|d| self.series(d)[i]) })
            .collect()
    }

    /// Largest single bucket across all series; used to scale chart axes.
    #[must_use]
    pub fn max_bucket(&self) -> u64 {
        Dimension::ALL
            .iter()
            .flat_map(|d| self.series(*d).iter().copied())
            .max()
            .unwrap_or(0)
    }
}

// =============================================================================
// INSIGHTS
// =============================================================================

/// Classification tag of an insight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    #[default]
    #[serde(other)]
    Info,
}

impl InsightKind {
    /// Display priority; lower sorts first.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Warning => 0,
            Self::Info => 1,
            Self::Success => 2,
        }
    }
}

/// A rule-derived recommendation tied to one metric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightItem {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub metric: String,
    pub message: String,
    pub affected_chunks: u64,
    pub recommendation: String,
}

// =============================================================================
// FILTERS
// =============================================================================

/// Sortable chunk columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    DocName,
    Substantive,
    Cohesive,
    LastEvalTime,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocName => "doc_name",
            Self::Substantive => "substantive",
            Self::Cohesive => "cohesive",
            Self::LastEvalTime => "last_eval_time",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Request shape for a page of chunks. Also the query-string of the chunk route.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilters {
    #[serde(default)]
    pub bot_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Minimum mean chunk score (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ApiFilters {
    #[must_use]
    pub fn for_bot(bot_id: impl Into<String>) -> Self {
        Self { bot_id: bot_id.into(), ..Self::default() }
    }

    /// Search query with surrounding whitespace removed; `None` when blank.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.search_query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Page number with `0` and absent treated as the first page.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size bounded to `[1, MAX_PAGE_SIZE]`, falling back to `default`.
    #[must_use]
    pub fn effective_page_size(&self, default: u32) -> u32 {
        self.page_size.unwrap_or(default).clamp(1, MAX_PAGE_SIZE)
    }

    /// Number of records to skip for the requested page.
    #[must_use]
    pub fn offset(&self, default_page_size: u32) -> usize {
        (self.effective_page() as usize - 1) * self.effective_page_size(default_page_size) as usize
    }
}
