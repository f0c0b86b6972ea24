//! Text processing utilities.
//!
//! Provides sentence splitting and rejoining, word counting, and the small
//! whitespace and capitalization helpers shared by the scorer and the
//! rewrite pipeline.

use regex::Regex;
use std::sync::LazyLock;

/// Horizontal whitespace left dangling before a newline.
static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+\n").expect("valid regex"));

/// Three or more consecutive newlines.
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Any run of whitespace.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Two or more whitespace characters in a row.
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// A word: letters, digits, and apostrophes.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9']+").expect("valid regex"));

/// Normalize line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split text into trimmed, non-empty sentences.
///
/// A boundary is a `.`, `!` or `?` followed by at least one whitespace
/// character. The punctuation stays with the sentence it ends.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_newlines(text);
    let normalized = TRAILING_SPACE.replace_all(&normalized, "\n");
    let normalized = EXCESS_NEWLINES.replace_all(&normalized, "\n\n");
    let normalized = normalized.trim();

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = normalized.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }
        let end = idx + ch.len_utf8();
        if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }
        push_trimmed(&mut sentences, &normalized[start..end]);
        // Consume the whitespace run; the next sentence starts after it.
        start = end;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            start = ws_idx + ws.len_utf8();
            chars.next();
        }
    }
    push_trimmed(&mut sentences, &normalized[start..]);

    sentences
}

/// Join sentences with single spaces, collapsing all whitespace runs.
///
/// Paragraph breaks do not survive a split/join round trip; the output is
/// always a single line.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    let joined = sentences
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

/// Count words (runs of ASCII letters, digits, and apostrophes).
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Extract lower-cased word tokens in reading order.
pub fn word_tokens(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Upper-case a leading lower-case ASCII letter, dropping any whitespace
/// before it. Text that does not start with such a letter is returned as-is.
pub fn capitalize_first(s: &str) -> String {
    let rest = s.trim_start();
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(rest.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => s.to_string(),
    }
}

/// Collapse runs of two or more whitespace characters to a single space.
pub fn collapse_spaces(s: &str) -> String {
    MULTI_SPACE.replace_all(s, " ").into_owned()
}

/// Number of Unicode scalar values in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
