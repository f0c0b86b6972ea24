//! Heuristic AI-likelihood scoring.
//!
//! Combines lexical and structural signals into a 0–100 score:
//!
//! | Signal | Max points |
//! |---|---|
//! | boilerplate phrases ("as an ai", "in conclusion", ...) | 45 |
//! | formal transitions and filler ("furthermore", "robust", ...) | 12 |
//! | uniform sentence lengths (6+ sentences) | 12 |
//! | transition-word rate | 16 |
//! | bullet lines | 8 |
//! | repeated trigrams | 10 |
//!
//! Short texts are damped hard: every word-count threshold below 200
//! multiplies the score again, so a ten-word text keeps about a tenth of its
//! raw score. This is a heuristic, not a classifier.

use aho_corasick::AhoCorasick;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::text;
use crate::word_lists::{STRONG_PHRASES, TRANSITION_WORDS, WEAK_PHRASES, alternation};

/// Upper bound on tokens fed to trigram counting.
pub const MAX_TRIGRAM_TOKENS: usize = 100_000;

static STRONG: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(STRONG_PHRASES).expect("valid phrase list"));

static WEAK: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(WEAK_PHRASES).expect("valid phrase list"));

static TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(TRANSITION_WORDS))).expect("valid regex")
});

static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*•]|\d+\.)\s+").expect("valid regex"));

/// Coarse likelihood band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Band {
    /// Nothing to score (empty input).
    #[serde(rename = "—")]
    Unscored,
    /// Score below 50.
    Low,
    /// Score 50–79, or a high score without corroborating signals.
    Medium,
    /// Score 80+ with corroborating signals.
    High,
}

impl Band {
    /// Returns the band label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unscored => "—",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of AI-likelihood scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LikelihoodReport {
    /// Score from 0 (human-like) to 100 (machine-like).
    pub score: u8,
    /// Band derived from the score.
    pub band: Band,
    /// Distinct human-readable reasons, in the order they were found.
    pub reasons: Vec<String>,
}

impl LikelihoodReport {
    /// The result for empty input.
    pub const fn unscored() -> Self {
        Self {
            score: 0,
            band: Band::Unscored,
            reasons: Vec::new(),
        }
    }
}

/// The raw signals behind a score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LikelihoodSignals {
    /// Distinct boilerplate phrases present.
    pub strong_hits: usize,
    /// Distinct formal-transition or filler phrases present.
    pub weak_hits: usize,
    /// Number of words.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Sentence-length uniformity, 0–1 (1 = identical lengths).
    pub uniformity: f64,
    /// Transition words per word.
    pub transition_rate: f64,
    /// Lines that look like list items.
    pub bullet_lines: usize,
    /// Distinct trigrams occurring three or more times.
    pub repeated_trigrams: usize,
}

/// Score how likely `text` is to be machine-written.
///
/// Empty or whitespace-only text returns [`LikelihoodReport::unscored`].
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score_ai_likelihood(text: &str) -> LikelihoodReport {
    if text.trim().is_empty() {
        return LikelihoodReport::unscored();
    }
    let signals = analyze_signals(text);
    let report = score_signals(&signals);
    tracing::debug!(score = report.score, band = %report.band, "scored text");
    report
}

/// Extract the scoring signals from `text`.
pub fn analyze_signals(text: &str) -> LikelihoodSignals {
    let t = text.trim();
    let lower = t.to_lowercase();

    let strong_hits = distinct_hits(&STRONG, &lower);
    let weak_hits = distinct_hits(&WEAK, &lower);

    let tokens = text::word_tokens(t);
    let word_count = tokens.len();

    let sentences = text::split_sentences(t);
    let sent_lens: Vec<usize> = sentences
        .iter()
        .map(|s| text::count_words(s))
        .filter(|&n| n > 0)
        .collect();

    let transitions = TRANSITION.find_iter(&lower).count();
    let transition_rate = if word_count > 0 {
        transitions as f64 / word_count as f64
    } else {
        0.0
    };

    LikelihoodSignals {
        strong_hits,
        weak_hits,
        word_count,
        sentence_count: sentences.len(),
        uniformity: uniformity(&sent_lens),
        transition_rate,
        bullet_lines: BULLET_LINE.find_iter(t).count(),
        repeated_trigrams: repeated_trigrams(&tokens),
    }
}

/// Turn signals into a score, band, and reasons.
pub fn score_signals(s: &LikelihoodSignals) -> LikelihoodReport {
    let mut score = 0.0;
    let mut reasons = Reasons::default();

    score += clamp(s.strong_hits as f64 * 18.0, 0.0, 45.0);
    if s.strong_hits >= 2 {
        reasons.push("multiple AI-style boilerplate phrases");
    } else if s.strong_hits == 1 {
        reasons.push("AI-style boilerplate phrase");
    }

    score += clamp(s.weak_hits as f64 * 3.0, 0.0, 12.0);
    if s.weak_hits >= 4 {
        reasons.push("heavy formal transition phrasing");
    }

    if s.sentence_count >= 6 {
        score += clamp(s.uniformity * 12.0, 0.0, 12.0);
        if s.uniformity > 0.78 {
            reasons.push("very uniform sentence lengths");
        }
    }

    score += clamp((s.transition_rate / 0.02) * 16.0, 0.0, 16.0);
    if s.transition_rate > 0.018 && s.word_count >= 120 {
        reasons.push("very frequent transition words");
    }

    if s.bullet_lines >= 5 {
        score += 8.0;
        reasons.push("list-heavy structure");
    } else if s.bullet_lines >= 3 {
        score += 4.0;
    }

    score += clamp(s.repeated_trigrams as f64 * 2.5, 0.0, 10.0);
    if s.repeated_trigrams >= 3 {
        reasons.push("repetitive phrasing");
    }

    // Thresholds compound: a 20-word text passes through all four.
    if s.word_count < 200 {
        score *= 0.85;
    }
    if s.word_count < 120 {
        score *= 0.70;
    }
    if s.word_count < 60 {
        score *= 0.50;
    }
    if s.word_count < 30 {
        score *= 0.35;
    }

    // Clamped to 0..=100 first, so the cast cannot truncate.
    let score = clamp(score, 0.0, 100.0).round() as u8;

    LikelihoodReport {
        score,
        band: assign_band(score, s),
        reasons: reasons.into_vec(),
    }
}

/// Map a score to a band.
///
/// A high score is downgraded to [`Band::Medium`] unless it is backed by
/// repeated boilerplate, or by a long text with at least one other strong
/// signal.
pub fn assign_band(score: u8, s: &LikelihoodSignals) -> Band {
    let band = match score {
        80.. => Band::High,
        50.. => Band::Medium,
        _ => Band::Low,
    };
    if band != Band::High {
        return band;
    }

    let has_strong = s.strong_hits >= 2;
    let long_enough = s.word_count >= 180;
    let multi_signal =
        s.weak_hits >= 4 || s.transition_rate > 0.018 || s.repeated_trigrams >= 3;
    if has_strong || (long_enough && multi_signal) {
        Band::High
    } else {
        Band::Medium
    }
}

/// Number of distinct patterns present, counting overlapping matches.
fn distinct_hits(matcher: &AhoCorasick, haystack: &str) -> usize {
    matcher
        .find_overlapping_iter(haystack)
        .map(|m| m.pattern())
        .collect::<HashSet<_>>()
        .len()
}

/// `1 - clamp(stddev / mean, 0, 1)` over sentence lengths; 0 when empty.
fn uniformity(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / count;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / count;
    1.0 - clamp(variance.sqrt() / mean, 0.0, 1.0)
}

/// Count distinct trigrams that occur at least three times.
fn repeated_trigrams(tokens: &[String]) -> usize {
    let tokens = &tokens[..tokens.len().min(MAX_TRIGRAM_TOKENS)];
    let mut counts: HashMap<[&str; 3], usize> = HashMap::new();
    for w in tokens.windows(3) {
        *counts
            .entry([w[0].as_str(), w[1].as_str(), w[2].as_str()])
            .or_insert(0) += 1;
    }
    counts.values().filter(|&&c| c >= 3).count()
}

fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.clamp(min, max)
}

/// Reasons in first-seen order, without duplicates.
#[derive(Default)]
struct Reasons(Vec<String>);

impl Reasons {
    fn push(&mut self, reason: &str) {
        if !self.0.iter().any(|r| r == reason) {
            self.0.push(reason.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}
