//! Curated word lists for scoring and rewriting.
//!
//! Boilerplate phrases, formal transitions, wrapper phrases, run-on
//! connectors, hedges, and filler words. All entries are lower-case.

/// Boilerplate phrases that strongly suggest machine-written prose.
pub const STRONG_PHRASES: &[&str] = &[
    "as an ai language model",
    "as an ai",
    "i don't have access to real-time data",
    "it is important to note that",
    "it is worth noting that",
    "key takeaways",
    "in conclusion",
    "to summarize",
    "in summary",
];

/// Formal transitions and filler that weakly suggest machine-written prose.
pub const WEAK_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "therefore",
    "thus",
    "overall",
    "robust",
    "comprehensive",
    "delve into",
    "dive into",
];

/// Transition words counted for the transition-rate signal.
pub const TRANSITION_WORDS: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "therefore",
    "however",
    "thus",
    "consequently",
];

/// Summary wrappers stripped from the start or end of a text.
pub const WRAPPER_PHRASES: &[&str] = &["in conclusion", "to summarize", "in summary"];

/// Sentence openers that add to the previous point.
pub const ADDITIVE_OPENERS: &[&str] = &[
    "moreover",
    "furthermore",
    "additionally",
    "in addition",
    "also",
];

/// Sentence openers that contrast with the previous point.
pub const CONTRASTIVE_OPENERS: &[&str] = &["however", "that said", "on the other hand"];

/// Words at which an overlong sentence may be split in two.
pub const RUN_ON_CONNECTORS: &[&str] = &["and", "but", "so", "because", "which", "while"];

/// Hedging words replaced with "can" in a confident tone.
pub const HEDGES: &[&str] = &["might", "may", "could"];

/// Intensifiers and fillers dropped in a concise tone.
pub const FILLERS: &[&str] = &["very", "really", "actually", "basically"];

/// Emoji removed in a professional tone.
pub const CASUAL_EMOJI: &[char] = &['\u{1F642}', '\u{1F604}', '\u{1F601}', '\u{1F60A}'];

/// Build a case-insensitive alternation of whole words or phrases.
///
/// Entries are escaped, so the lists above can hold any literal text.
pub fn alternation(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_lower_case() {
        for list in [
            STRONG_PHRASES,
            WEAK_PHRASES,
            TRANSITION_WORDS,
            WRAPPER_PHRASES,
            ADDITIVE_OPENERS,
            CONTRASTIVE_OPENERS,
            RUN_ON_CONNECTORS,
            HEDGES,
            FILLERS,
        ] {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase());
            }
        }
    }

    #[test]
    fn alternation_escapes_entries() {
        assert_eq!(alternation(&["a.b", "c"]), r"a\.b|c");
    }
}
