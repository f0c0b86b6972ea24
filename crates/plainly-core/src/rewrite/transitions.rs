//! Transition de-duplication across a sentence sequence.
//!
//! A run of sentences that all open with "Also," or "However," reads as
//! machine-made. The first opener of each family survives; later ones are
//! dropped (additive) or varied (contrastive).

use regex::Regex;
use std::sync::LazyLock;

use crate::text;
use crate::word_lists::{ADDITIVE_OPENERS, CONTRASTIVE_OPENERS, alternation};

static ADDITIVE_START: LazyLock<Regex> = LazyLock::new(|| opener(ADDITIVE_OPENERS, false));
static ADDITIVE_LEAD: LazyLock<Regex> = LazyLock::new(|| opener(ADDITIVE_OPENERS, true));
static CONTRASTIVE_START: LazyLock<Regex> = LazyLock::new(|| opener(CONTRASTIVE_OPENERS, false));
static CONTRASTIVE_LEAD: LazyLock<Regex> = LazyLock::new(|| opener(CONTRASTIVE_OPENERS, true));

/// Targeted rewordings applied to every sentence, in order.
static REWORDINGS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (opener(&["however"], true), "But "),
        (
            opener(&["furthermore", "additionally", "in addition"], true),
            "Also, ",
        ),
        (opener(&["moreover"], true), "Plus, "),
    ]
});

/// Anchored, case-insensitive opener pattern. With `lead`, the match also
/// swallows a trailing `:` or `,` and the whitespace after it.
fn opener(words: &[&str], lead: bool) -> Regex {
    let tail = if lead { r"[:,]?\s+" } else { "" };
    Regex::new(&format!(r"(?i)^(?:{})\b{tail}", alternation(words))).expect("valid regex")
}

/// How many sentences of each transition family have been seen so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransitionState {
    /// Sentences opening with an additive transition.
    pub additive_seen: usize,
    /// Sentences opening with a contrastive transition.
    pub contrastive_seen: usize,
}

impl TransitionState {
    /// Rewrite one sentence's opener, updating the family counters.
    pub fn rewrite(&mut self, sentence: &str) -> String {
        let mut x = sentence.to_string();

        if ADDITIVE_START.is_match(&x) {
            self.additive_seen += 1;
            if self.additive_seen > 1 {
                x = ADDITIVE_LEAD.replace(&x, "").into_owned();
            }
        }

        if CONTRASTIVE_START.is_match(&x) {
            self.contrastive_seen += 1;
            if self.contrastive_seen > 1 {
                x = CONTRASTIVE_LEAD.replace(&x, "Still, ").into_owned();
            }
        }

        for (pattern, lead) in REWORDINGS.iter() {
            x = pattern.replace(&x, *lead).into_owned();
        }

        text::capitalize_first(&x).trim().to_string()
    }
}

/// De-duplicate leading transitions across `sentences`, preserving order.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn dedupe_transitions<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    sentences
        .iter()
        .scan(TransitionState::default(), |state, s| {
            Some(state.rewrite(s.as_ref()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_furthermore() {
        let out = dedupe_transitions(&[
            "Furthermore, the cache is warm.",
            "Furthermore, the queue is empty.",
            "Furthermore: the disk is fine.",
        ]);
        assert_eq!(out[0], "Also, the cache is warm.");
        assert_eq!(out[1], "The queue is empty.");
        assert_eq!(out[2], "The disk is fine.");
        assert!(out.iter().all(|s| !s.starts_with("Furthermore")));
    }

    #[test]
    fn first_also_survives_later_ones_drop() {
        let out = dedupe_transitions(&["Also, one.", "Also two.", "also, three."]);
        assert_eq!(out, vec!["Also, one.", "Two.", "Three."]);
    }

    #[test]
    fn contrastive_repeats_become_still() {
        let out = dedupe_transitions(&[
            "However, it rained.",
            "However, we went out.",
            "On the other hand, it was warm.",
        ]);
        assert_eq!(out[0], "But it rained.");
        assert_eq!(out[1], "Still, we went out.");
        assert_eq!(out[2], "Still, it was warm.");
    }

    #[test]
    fn families_count_independently() {
        let out = dedupe_transitions(&["Moreover, a.", "However, b.", "In addition, c."]);
        assert_eq!(out, vec!["Plus, a.", "But b.", "C."]);
    }

    #[test]
    fn word_prefix_is_not_a_transition() {
        let out = dedupe_transitions(&["Also, a.", "Alsomething else."]);
        assert_eq!(out[1], "Alsomething else.");
    }

    #[test]
    fn sentences_are_recapitalized() {
        let out = dedupe_transitions(&["plain start."]);
        assert_eq!(out, vec!["Plain start."]);
    }

    #[test]
    fn state_counts_openers() {
        let mut state = TransitionState::default();
        state.rewrite("Also, x.");
        state.rewrite("That said, y.");
        state.rewrite("No opener.");
        assert_eq!(
            state,
            TransitionState {
                additive_seen: 1,
                contrastive_seen: 1
            }
        );
    }
}
