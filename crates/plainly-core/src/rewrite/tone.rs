//! Tone adjustments applied after the sentence-level rewrite.

use regex::Regex;
use std::sync::LazyLock;

use super::Tone;
use crate::case::{self, SubstitutionRule};
use crate::text;
use crate::word_lists::{CASUAL_EMOJI, FILLERS, HEDGES, alternation};

static CONFIDENT: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    vec![
        SubstitutionRule::literal(&format!(r"\b(?:{})\b", alternation(HEDGES)), "can")
            .expect("valid regex"),
        SubstitutionRule::literal(r"\bperhaps\b", "").expect("valid regex"),
    ]
});

static FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(FILLERS))).expect("valid regex")
});

/// Adjust `text` toward `tone`. Neutral and friendly leave it unchanged.
pub fn apply_tone(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Neutral | Tone::Friendly => text.to_string(),
        Tone::Professional => text.chars().filter(|c| !CASUAL_EMOJI.contains(c)).collect(),
        Tone::Confident => {
            let hedged = case::apply_rules(text, &CONFIDENT);
            text::collapse_spaces(&hedged).trim().to_string()
        }
        Tone::Concise => {
            let trimmed = FILLER.replace_all(text, "");
            text::collapse_spaces(&trimmed).trim().to_string()
        }
    }
}
