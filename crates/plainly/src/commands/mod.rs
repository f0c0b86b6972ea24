//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod humanize;
pub mod info;
pub mod reveal;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read raw text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("failed to read {path}")),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Read input text and sanitize it against the configured limit.
///
/// Fails when nothing is left after sanitizing.
pub fn read_input(path: Option<&Utf8Path>, max_chars: Option<usize>) -> anyhow::Result<String> {
    let raw = read_source(path)?;
    let text = plainly_core::accept_input(&raw, max_chars)
        .with_context(|| format!("no text to process in {}", source_label(path)))?;
    Ok(text)
}

/// How to name the input in messages.
pub fn source_label(path: Option<&Utf8Path>) -> &str {
    match path {
        Some(path) if path.as_str() != "-" => path.as_str(),
        _ => "stdin",
    }
}
