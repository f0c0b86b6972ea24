//! Run-on sentence softening.

use regex::Regex;
use std::sync::LazyLock;

use super::Strength;
use crate::text;
use crate::word_lists::{RUN_ON_CONNECTORS, alternation};

static CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s+({})\s+",
        alternation(RUN_ON_CONNECTORS)
    ))
    .expect("valid regex")
});

/// Split overlong sentences in two at their first connector word.
///
/// A sentence qualifies when it has more chars than the strength's
/// [`Strength::run_on_threshold`]. The connector stays with the first half,
/// which gains a closing period; the second half is re-capitalized. A long
/// sentence without a connector is left alone.
#[tracing::instrument(skip_all, fields(sentences = sentences.len(), strength = %strength))]
pub fn soften_run_ons<S: AsRef<str>>(sentences: &[S], strength: Strength) -> Vec<String> {
    let max_len = strength.run_on_threshold();
    let mut out = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let sentence = sentence.as_ref();
        if text::char_len(sentence) <= max_len {
            out.push(sentence.to_string());
            continue;
        }

        let Some(caps) = CONNECTOR.captures(sentence) else {
            out.push(sentence.to_string());
            continue;
        };
        let (Some(whole), Some(connector)) = (caps.get(0), caps.get(1)) else {
            out.push(sentence.to_string());
            continue;
        };

        let mut first = format!("{} {}", &sentence[..whole.start()], connector.as_str())
            .trim()
            .to_string();
        if !first.ends_with(['.', '!', '?']) {
            first.push('.');
        }
        out.push(first);

        let rest = sentence[whole.end()..].trim();
        if !rest.is_empty() {
            out.push(text::capitalize_first(rest));
        }
    }

    tracing::debug!(before = sentences.len(), after = out.len(), "softened run-ons");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    #[test]
    fn long_sentence_splits_at_connector() {
        let sentence = format!("{} and {}.", filler(20), filler(20));
        assert!(text::char_len(&sentence) > 170);
        let out = soften_run_ons(&[sentence.as_str()], Strength::Strong);
        assert_eq!(out.len(), 2);
        assert!(out[0].ends_with("and."));
        assert!(out[1].starts_with("Lorem"));
        assert!(out[1].ends_with('.'));
    }

    #[test]
    fn long_sentence_without_connector_is_untouched() {
        let sentence = format!("{}.", filler(45));
        let out = soften_run_ons(&[sentence.as_str()], Strength::Strong);
        assert_eq!(out, vec![sentence]);
    }

    #[test]
    fn threshold_depends_on_strength() {
        // 207 chars: between the medium and light thresholds.
        let sentence = format!("{} but {}", filler(17), filler(17));
        let len = text::char_len(&sentence);
        assert!(len > 200 && len <= 240, "len = {len}");
        assert_eq!(soften_run_ons(&[sentence.as_str()], Strength::Light).len(), 1);
        assert_eq!(soften_run_ons(&[sentence.as_str()], Strength::Medium).len(), 2);
    }

    #[test]
    fn short_sentences_pass_through() {
        let out = soften_run_ons(&["Cats and dogs."], Strength::Strong);
        assert_eq!(out, vec!["Cats and dogs."]);
    }

    #[test]
    fn connector_match_is_case_insensitive() {
        let sentence = format!("{} BECAUSE {}", filler(20), filler(20));
        let out = soften_run_ons(&[sentence.as_str()], Strength::Strong);
        assert_eq!(out.len(), 2);
        assert!(out[0].ends_with("BECAUSE."));
    }

    #[test]
    fn length_is_measured_in_chars() {
        // 165 chars but 325 bytes: under the strong threshold.
        let sentence = format!("{} and {}", "é".repeat(80), "é".repeat(80));
        assert_eq!(soften_run_ons(&[sentence.as_str()], Strength::Strong).len(), 1);
    }
}
