//! Deterministic sample corpus for the in-process data source.
//!
//! DESIGN
//! ======
//! Each bot gets its own `StdRng` seeded from the bot id, so a given id
//! always produces the same chunks across restarts and test runs. Chunks are
//! variations of a handful of knowledge-base articles: scores jitter by up
//! to two points around the article's base scores, summary scores by 0.15,
//! and texts are cut to varying lengths so the size histogram has spread.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chunks::model::{MAX_SCORE, MIN_SCORE};
use chunks::overview::LOW_QUALITY_MEAN_THRESHOLD;
use chunks::{BotMetrics, ChunkDocument, ChunkSource, Dimension, QualityMetrics, ScoreDistribution};

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;

pub const MIN_CORPUS_CHUNKS: usize = 36;
pub const MAX_CORPUS_CHUNKS: usize = 72;

const SCORE_JITTER: i16 = 2;
const SUMMARY_JITTER: f64 = 0.15;
const INDEX_NAME: &str = "documents_v2_x1695206105900_gpt";
const DOCUMENT_SOURCE: &str = "yellowmessenger";
const MIN_TEXT_CHARS: usize = 120;

// =============================================================================
// ARTICLES
// =============================================================================

struct Article {
    text: &'static str,
    base: [u8; 5],
    substantive: f64,
    cohesive: f64,
    reasons: [&'static str; 5],
}

/// Base scores are in `Dimension::ALL` order.
const ARTICLES: [Article; 3] = [
    Article {
        text: "KBID – 14  \n  \nExcel Crash Issue When Saving/Browsing Files Issue Description User is unable to save or browse files. The application will crash or shut down.  Affected Platforms · Excel · Word · PowerPoint  Instructions  1. Launch Excel 2. Click File-->Account 3. On top left-hand corner under User Information, Click Sign Out. 4. Close Excel application. 5. On the bottom left-hand corner of your screen, click on the Windows Icon. 6. Type Run, Hit Enter, type regedit, click OK and say Yes to pop-up.",
        base: [9, 9, 7, 8, 8],
        substantive: 0.85,
        cohesive: 0.72,
        reasons: [
            "The instructions follow a logical sequence, making it easy to understand the steps needed to address the issue. Each step builds on the previous one, maintaining a clear focus on resolving the crash.",
            "The chunk is focused on relevant troubleshooting information with minimal extraneous content. There are no distracting elements or irrelevant information present.",
            "While the chunk provides a series of steps, it does not conclude with a final action or result after the registry edit, leaving the process feeling slightly incomplete.",
            "The chunk provides specific, actionable instructions for troubleshooting the Excel crash issue, detailing the steps to sign out and access the registry editor, which are relevant to the problem described.",
            "The chunk is mostly understandable on its own, with clear headings and a structured format. However, some terms like 'regedit' may require prior knowledge for full clarity.",
        ],
    },
    Article {
        text: "KBID – 22  \n  \nVPN Disconnects After Sleep Issue Description The corporate VPN client drops the tunnel when the laptop resumes from sleep and does not reconnect automatically.  Affected Platforms · Windows 10 · Windows 11  Instructions  1. Open the VPN client and choose Settings 2. Enable Reconnect on network change 3. Open Device Manager and expand Network adapters 4. Right-click the wireless adapter, choose Properties, then Power Management 5. Clear Allow the computer to turn off this device to save power 6. Restart the laptop and confirm the tunnel survives a sleep cycle.",
        base: [8, 7, 8, 7, 6],
        substantive: 0.78,
        cohesive: 0.81,
        reasons: [
            "Steps move from the VPN client to the adapter settings in a clear order and stay on the single topic of reconnecting after sleep.",
            "Platform tags and the article header add a little clutter but do not distract from the procedure.",
            "The procedure ends with a verification step, so a reader knows when the fix has worked.",
            "Each step names the exact setting to change, giving the reader concrete and useful guidance.",
            "The chunk assumes the reader knows which VPN client is deployed, which limits how well it stands on its own.",
        ],
    },
    Article {
        text: "Printer Queue Stuck  \n  \nIf documents remain in the print queue with status Error, open Services, stop Print Spooler, delete the files under the spool PRINTERS folder, then start Print Spooler again. See also KBID – 31 for driver reinstall steps and the helpdesk page for contact hours.",
        base: [6, 5, 5, 6, 4],
        substantive: 0.61,
        cohesive: 0.58,
        reasons: [
            "The fix is coherent but the trailing cross-references pull attention toward unrelated material.",
            "References to other articles and helpdesk hours are noise for the stuck-queue procedure.",
            "The folder path is abbreviated, so a reader cannot complete the deletion step from this chunk alone.",
            "The core instructions are useful though brief, with little detail on when the fix applies.",
            "Without the referenced articles the reader lacks the driver context this chunk depends on.",
        ],
    },
];

// =============================================================================
// GENERATION
// =============================================================================

/// Stable 64-bit seed for a bot id (FNV-1a).
#[must_use]
pub fn seed_for(bot_id: &str) -> u64 {
    bot_id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3))
}

fn jitter_score(rng: &mut StdRng, base: u8) -> u8 {
    let shifted = i16::from(base) + rng.random_range(-SCORE_JITTER..=SCORE_JITTER);
    shifted.clamp(i16::from(MIN_SCORE), i16::from(MAX_SCORE)) as u8
}

fn jitter_summary(rng: &mut StdRng, base: f64) -> f64 {
    (base + rng.random_range(-SUMMARY_JITTER..=SUMMARY_JITTER)).clamp(0.0, 1.0)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect::<String>().trim_end().to_owned()
}

fn eval_time(rng: &mut StdRng) -> String {
    let day: u8 = rng.random_range(1..=30);
    let hour: u8 = rng.random_range(0..24);
    let minute: u8 = rng.random_range(0..60);
    let second: u8 = rng.random_range(0..60);
    let millis: u16 = rng.random_range(0..1000);
    format!("2025-04-{day:02}T{hour:02}:{minute:02}:{second:02}.{millis:03}Z")
}

fn generate_chunk(rng: &mut StdRng, index: usize) -> ChunkDocument {
    let article = &ARTICLES[rng.random_range(0..ARTICLES.len())];
    let full_len = article.text.chars().count();
    let text = truncate_chars(article.text, rng.random_range(MIN_TEXT_CHARS.min(full_len)..=full_len));
    let [cohesion, low_noise, completeness, substantiveness, contextual] = article.base;
    let [coherent_reason, noise_reason, complete_reason, substantive_reason, context_reason] = article.reasons;

    let eval_metrics = QualityMetrics {
        cohesion_score: jitter_score(rng, cohesion),
        low_noise_score: jitter_score(rng, low_noise),
        completeness_score: jitter_score(rng, completeness),
        substantiveness_score: jitter_score(rng, substantiveness),
        contextual_sufficiency_score: jitter_score(rng, contextual),
        coherent_reason: coherent_reason.to_owned(),
        noise_reason: noise_reason.to_owned(),
        complete_reason: complete_reason.to_owned(),
        substantive_reason: substantive_reason.to_owned(),
        context_reason: context_reason.to_owned(),
    };
    let pg_num = rng.random_range(1..=4);

    ChunkDocument {
        id: format!("chunk_{}", index + 1),
        index: INDEX_NAME.to_owned(),
        score: 1.0,
        source: ChunkSource {
            question: text.clone(),
            parser_type: "pypdf_loader".to_owned(),
            answer: text.clone(),
            doc_type: "answers".to_owned(),
            page_numbers: vec![pg_num],
            query_question: text.clone(),
            text,
            doc_name: format!("Document_{}.pdf", index / 3 + 1),
            pg_num,
            paragraph_id: format!("paragraph_{}", index + 1),
            document_source: DOCUMENT_SOURCE.to_owned(),
            eval_metrics,
            substantive: jitter_summary(rng, article.substantive),
            cohesive: jitter_summary(rng, article.cohesive),
            last_eval_time: eval_time(rng),
        },
    }
}

/// Generate the full corpus for `bot_id`.
#[must_use]
pub fn generate(bot_id: &str) -> Vec<ChunkDocument> {
    let mut rng = StdRng::seed_from_u64(seed_for(bot_id));
    let count = rng.random_range(MIN_CORPUS_CHUNKS..=MAX_CORPUS_CHUNKS);
    (0..count).map(|i| generate_chunk(&mut rng, i)).collect()
}

// =============================================================================
// AGGREGATION
// =============================================================================

/// Aggregate a corpus into `BotMetrics`: per-dimension averages, score
/// histograms, the measured low-quality count and the newest evaluation.
#[must_use]
pub fn aggregate(bot_id: &str, corpus: &[ChunkDocument]) -> BotMetrics {
    let mut distribution = ScoreDistribution::default();
    let mut sums = [0_u64; 5];
    let mut low_quality = 0_u64;
    let mut last_evaluated: Option<&str> = None;

    for chunk in corpus {
        let metrics = &chunk.source.eval_metrics;
        distribution.record_all(metrics);
        for (slot, dimension) in sums.iter_mut().zip(Dimension::ALL) {
            *slot += u64::from(metrics.score(dimension));
        }
        if metrics.mean_score() < LOW_QUALITY_MEAN_THRESHOLD {
            low_quality += 1;
        }
        let ts = chunk.source.last_eval_time.as_str();
        if !ts.is_empty() && last_evaluated.is_none_or(|newest| ts > newest) {
            last_evaluated = Some(ts);
        }
    }

    let total = corpus.len() as u64;
    let mean = |sum: u64| if total == 0 { 0.0 } else { sum as f64 / total as f64 };
    let [cohesion, low_noise, completeness, substantiveness, contextual] = sums;

    BotMetrics {
        bot_id: bot_id.to_owned(),
        total_chunks: total,
        avg_substantive: mean(substantiveness),
        avg_cohesive: mean(cohesion),
        avg_completeness: mean(completeness),
        avg_low_noise: mean(low_noise),
        avg_contextual_sufficiency: mean(contextual),
        scores_distribution: distribution,
        low_quality_chunks: Some(low_quality),
        last_evaluated: last_evaluated.map(str::to_owned),
    }
}
