//! Contraction table.

use std::sync::LazyLock;

use crate::case::{self, SubstitutionRule};

static CONTRACTIONS: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    [
        (r"\bdo not\b", "don't"),
        (r"\bdoes not\b", "doesn't"),
        (r"\bdid not\b", "didn't"),
        (r"\bcannot\b", "can't"),
        (r"\bwill not\b", "won't"),
        (r"\bis not\b", "isn't"),
        (r"\bare not\b", "aren't"),
        (r"\bshould not\b", "shouldn't"),
        (r"\bwould not\b", "wouldn't"),
        (r"\bcould not\b", "couldn't"),
        (r"\bI am\b", "I'm"),
        (r"\bI have\b", "I've"),
        (r"\bwe are\b", "we're"),
        (r"\byou are\b", "you're"),
        (r"\bthey are\b", "they're"),
    ]
    .into_iter()
    .map(|(pattern, out)| SubstitutionRule::literal(pattern, out).expect("valid contraction"))
    .collect()
});

/// Contract common verb phrases, keeping the original casing.
pub fn apply_contractions(sentence: &str) -> String {
    case::apply_rules(sentence, &CONTRACTIONS)
}
