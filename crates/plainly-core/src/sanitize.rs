//! Input sanitization for callers of the core pipelines.
//!
//! The scorer and humanizer assume clean, bounded text. Front ends (the CLI,
//! the MCP server) pass raw input through [`accept_input`] first.

use crate::error::{InputError, InputResult};
use crate::text;

/// Default cap on input length, in chars.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 20_000;

/// The first `max_chars` chars of `text`, or all of it when `None`.
pub fn truncate_chars(text: &str, max_chars: Option<usize>) -> &str {
    match max_chars.and_then(|max| text.char_indices().nth(max)) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Strip NUL bytes, cap the length, normalize line endings, and trim.
///
/// Text longer than `max_chars` chars is truncated, not rejected.
pub fn sanitize_text(raw: &str, max_chars: Option<usize>) -> String {
    let without_nul = raw.replace('\0', "");
    let capped = truncate_chars(&without_nul, max_chars);
    text::normalize_newlines(capped).trim().to_string()
}

/// Sanitize `raw` and reject it if nothing is left.
pub fn accept_input(raw: &str, max_chars: Option<usize>) -> InputResult<String> {
    let text = sanitize_text(raw, max_chars);
    if text.is_empty() {
        tracing::debug!(raw_len = raw.len(), "rejected empty input");
        return Err(InputError::MissingText);
    }
    if max_chars.is_some_and(|max| text::char_len(raw) > max) {
        tracing::warn!(limit = ?max_chars, "input truncated to limit");
    }
    Ok(text)
}
