//! Phrase-swap table: disclaimers, wrappers, stiff transitions, jargon.

use regex::Captures;
use std::sync::LazyLock;

use crate::case::{self, Replacement, SubstitutionRule};

/// Ordered swap rules. Later rules see the output of earlier ones.
static SWAPS: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    let literal = |pattern: &str, out: &'static str| {
        SubstitutionRule::literal(pattern, out).expect("valid swap pattern")
    };
    vec![
        // disclaimers
        literal(r"\bAs an AI language model\b[:, ]*", ""),
        literal(r"\bAs an AI\b[:, ]*", ""),
        // wrappers and padding
        literal(r"\bIn conclusion\b[:, ]*", ""),
        literal(r"\bIn summary\b[:, ]*", ""),
        literal(r"\bTo summarize\b[:, ]*", ""),
        literal(r"\bIt is important to note that\b\s+", ""),
        literal(r"\bIt is worth noting that\b\s+", "Notably, "),
        literal(r"\bIn order to\b", "to"),
        literal(r"\bDue to the fact that\b", "because"),
        literal(r"\bIn the event that\b", "if"),
        // transitions
        literal(r"\bFurthermore\b", "also"),
        literal(r"\bMoreover\b", "plus"),
        literal(r"\bAdditionally\b", "also"),
        literal(r"\bHowever\b", "but"),
        literal(r"\bNevertheless\b", "still"),
        literal(r"\bOn the other hand\b", "that said"),
        // corporate
        literal(r"\bUtilize\b", "use"),
        literal(r"\bLeverage\b", "use"),
        literal(r"\bFacilitate\b", "help"),
        literal(r"\bCommence\b", "start"),
        SubstitutionRule::new(
            r"\bwith regard to\s+([^,.!?;:]+)",
            Replacement::Derived(regarding),
        )
        .expect("valid swap pattern"),
        literal(r"\s{2,}", " "),
    ]
});

fn regarding(caps: &Captures<'_>) -> String {
    format!("regarding {}", &caps[1])
}

/// Apply the phrase-swap table to raw text.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn apply_swaps(text: &str) -> String {
    case::apply_rules(text, &SWAPS)
}
