//! The humanize rewrite pipeline.
//!
//! Stages run strictly in order:
//!
//! 1. trim and normalize dashes
//! 2. phrase swaps ([`swaps`])
//! 3. sentence-level rewrite: wrapper stripping, transition
//!    de-duplication ([`transitions`]), contractions ([`contractions`]),
//!    run-on softening ([`run_ons`])
//! 4. tone ([`tone`])
//! 5. whitespace normalization for the chosen strength
//!
//! Each stage is a pure function in its own module and can be called on its
//! own.

pub mod contractions;
pub mod run_ons;
pub mod swaps;
pub mod tone;
pub mod transitions;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::text;
use crate::word_lists::{WRAPPER_PHRASES, alternation};

pub use swaps::apply_swaps;

static LEADING_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?:{})\b[:,]?\s*",
        alternation(WRAPPER_PHRASES)
    ))
    .expect("valid regex")
});

static TRAILING_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s*(?:{})\b[:,]?\s*$",
        alternation(WRAPPER_PHRASES)
    ))
    .expect("valid regex")
});

static SPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));

static THREE_PLUS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

static FOUR_PLUS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{4,}").expect("valid regex"));

/// Target tone for a rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No tone-specific changes (default).
    #[default]
    Neutral,
    /// No tone-specific changes; reserved for warmer phrasing.
    Friendly,
    /// Drops casual emoji.
    Professional,
    /// Replaces hedges (might, may, could) with "can" and drops "perhaps".
    Confident,
    /// Drops intensifiers and fillers (very, really, actually, basically).
    Concise,
}

impl Tone {
    /// All tones, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Neutral,
        Self::Friendly,
        Self::Professional,
        Self::Confident,
        Self::Concise,
    ];

    /// Returns the tone as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Confident => "confident",
            Self::Concise => "concise",
        }
    }

    /// Look up a tone by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Look up a tone by name, falling back to [`Tone::Neutral`].
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How aggressively to reshape sentences and whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Split only very long sentences; leave whitespace alone (default).
    #[default]
    Light,
    /// Split long sentences; cap blank-line runs at two.
    Medium,
    /// Split moderately long sentences; cap blank-line runs at one.
    Strong,
}

impl Strength {
    /// All strengths, in declaration order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Strong];

    /// Returns the strength as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Look up a strength by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Look up a strength by name, falling back to [`Strength::Light`].
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Sentences with more chars than this are candidates for splitting.
    pub const fn run_on_threshold(&self) -> usize {
        match self {
            Self::Strong => 170,
            Self::Medium => 200,
            Self::Light => 240,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`humanize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HumanizeOptions {
    /// Target tone.
    pub tone: Tone,
    /// Rewrite strength.
    pub strength: Strength,
    /// Contract common verb phrases ("do not" → "don't").
    pub contractions: bool,
    /// Split overlong sentences at a connector word.
    pub soften_run_ons: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            strength: Strength::default(),
            contractions: true,
            soften_run_ons: true,
        }
    }
}

/// Rewrite AI-sounding text into plainer phrasing.
///
/// Never fails; empty or whitespace-only input yields an empty string.
#[tracing::instrument(skip(input), fields(text_len = input.len(), tone = %options.tone, strength = %options.strength))]
pub fn humanize(input: &str, options: &HumanizeOptions) -> String {
    let text = normalize_dashes(input.trim());
    let text = swaps::apply_swaps(&text);
    let text = rewrite_sentences(&text, options);
    let text = tone::apply_tone(&text, options.tone);
    let text = normalize_whitespace(&text, options.strength);
    tracing::debug!(out_len = text.len(), "humanize complete");
    text
}

/// Map em dash, en dash, and minus sign to an ASCII hyphen.
pub fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2014}', '\u{2013}', '\u{2212}'], "-")
}

/// Strip a summary wrapper ("In conclusion," ...) from either end.
pub fn strip_wrappers(text: &str) -> String {
    let t = LEADING_WRAPPER.replace(text.trim(), "");
    let t = TRAILING_WRAPPER.replace(&t, "");
    t.trim().to_string()
}

/// The sentence-level stage: wrappers, transitions, contractions, run-ons.
pub fn rewrite_sentences(text: &str, options: &HumanizeOptions) -> String {
    let unwrapped = strip_wrappers(text);
    let sentences = text::split_sentences(&unwrapped);
    let mut sentences = transitions::dedupe_transitions(&sentences);

    if options.contractions {
        sentences = sentences
            .iter()
            .map(|s| contractions::apply_contractions(s))
            .collect();
    }
    if options.soften_run_ons {
        sentences = run_ons::soften_run_ons(&sentences, options.strength);
    }

    text::join_sentences(&sentences)
}

/// Trim trailing spaces before newlines and cap blank-line runs.
///
/// Strong caps newline runs at two, medium at three; light leaves the text
/// untouched.
pub fn normalize_whitespace(text: &str, strength: Strength) -> String {
    match strength {
        Strength::Light => text.to_string(),
        Strength::Medium => {
            let t = SPACE_BEFORE_NEWLINE.replace_all(text, "\n");
            FOUR_PLUS_NEWLINES.replace_all(&t, "\n\n\n").into_owned()
        }
        Strength::Strong => {
            let t = SPACE_BEFORE_NEWLINE.replace_all(text, "\n");
            THREE_PLUS_NEWLINES.replace_all(&t, "\n\n").into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(tone: Tone, strength: Strength) -> HumanizeOptions {
        HumanizeOptions {
            tone,
            strength,
            ..HumanizeOptions::default()
        }
    }

    #[test]
    fn end_to_end_disclaimer_and_wrapper() {
        let out = humanize(
            "As an AI language model, I am happy to help. In conclusion, it works.",
            &HumanizeOptions::default(),
        );
        let lower = out.to_lowercase();
        assert!(!lower.contains("as an ai language model"));
        assert!(!lower.contains("in conclusion"));
        assert!(out.contains("I'm"));
        assert_eq!(out, "I'm happy to help. It works.");
    }

    #[test]
    fn contractions_can_be_disabled() {
        let options = HumanizeOptions {
            contractions: false,
            ..HumanizeOptions::default()
        };
        let out = humanize("I am happy and you are ready.", &options);
        assert_eq!(out, "I am happy and you are ready.");
    }

    #[test]
    fn contractions_enabled() {
        let out = humanize("I am happy and you are ready", &HumanizeOptions::default());
        assert!(out.contains("I'm"));
        assert!(out.contains("you're"));
        assert!(!out.contains("I am"));
        assert!(!out.contains("you are"));
    }

    #[test]
    fn repeated_furthermore_is_not_repeated() {
        let out = humanize(
            "Furthermore, the cache is warm. Furthermore, the queue is empty. Furthermore, the disk is fine.",
            &HumanizeOptions::default(),
        );
        assert_eq!(out, "Also, the cache is warm. The queue is empty. The disk is fine.");
    }

    #[test]
    fn dashes_are_normalized() {
        let out = humanize("Fast\u{2014}and cheap \u{2013} mostly \u{2212}1.", &HumanizeOptions::default());
        assert_eq!(out, "Fast-and cheap - mostly -1.");
    }

    #[test]
    fn wrappers_stripped_from_both_ends() {
        assert_eq!(strip_wrappers("In summary: it works"), "it works");
        assert_eq!(strip_wrappers("it works. To summarize"), "it works.");
        assert_eq!(strip_wrappers("In summaryland"), "In summaryland");
    }

    #[test]
    fn run_on_softened_with_strong_strength() {
        let half = vec!["lorem"; 20].join(" ");
        let input = format!("{half} and {half}.");
        let out = humanize(&input, &opts(Tone::Neutral, Strength::Strong));
        let sentences = text::split_sentences(&out);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with('.'));
    }

    #[test]
    fn confident_tone_after_rewrite() {
        let out = humanize("We might win. Perhaps we will.", &opts(Tone::Confident, Strength::Light));
        assert_eq!(out, "We can win. we will.");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(humanize("", &HumanizeOptions::default()), "");
        assert_eq!(humanize("   \n ", &HumanizeOptions::default()), "");
    }

    #[test]
    fn whitespace_normalization_by_strength() {
        let text = "a  \n\n\n\n\nb";
        assert_eq!(normalize_whitespace(text, Strength::Light), text);
        assert_eq!(normalize_whitespace(text, Strength::Medium), "a\n\n\nb");
        assert_eq!(normalize_whitespace(text, Strength::Strong), "a\n\nb");
    }

    #[test]
    fn lenient_parsing_falls_back() {
        assert_eq!(Tone::parse_lenient("confident"), Tone::Confident);
        assert_eq!(Tone::parse_lenient("sarcastic"), Tone::Neutral);
        assert_eq!(Strength::parse_lenient("strong"), Strength::Strong);
        assert_eq!(Strength::parse_lenient("STRONG"), Strength::Light);
    }

    #[test]
    fn options_default_matches_endpoint_defaults() {
        let options = HumanizeOptions::default();
        assert_eq!(options.tone, Tone::Neutral);
        assert_eq!(options.strength, Strength::Light);
        assert!(options.contractions);
        assert!(options.soften_run_ons);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: HumanizeOptions =
            serde_json::from_str(r#"{"tone":"concise","soften_run_ons":false}"#).unwrap();
        assert_eq!(options.tone, Tone::Concise);
        assert_eq!(options.strength, Strength::Light);
        assert!(options.contractions);
        assert!(!options.soften_run_ons);
    }
}
