//! Reveal command: show or strip hidden Unicode characters.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use plainly_core::hidden::{self, HiddenCharReport};
use plainly_core::sanitize::truncate_chars;

use super::{read_source, source_label};

/// Arguments for the `reveal` subcommand.
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// File to inspect (stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Print the text with hidden characters removed instead of marked.
    #[arg(long)]
    pub strip: bool,
}

#[derive(Serialize)]
struct RevealOutput {
    #[serde(flatten)]
    report: HiddenCharReport,
    text: String,
}

/// Scan a text for hidden characters.
///
/// Input is read as-is apart from the length cap: trimming would drop the
/// leading and trailing no-break spaces this command exists to find.
#[instrument(name = "cmd_reveal", skip_all, fields(file = ?args.file))]
pub fn cmd_reveal(
    args: RevealArgs,
    global_json: bool,
    max_input_chars: Option<usize>,
) -> anyhow::Result<()> {
    debug!(strip = args.strip, "executing reveal command");

    let raw = read_source(args.file.as_deref())?;
    let text = truncate_chars(&raw, max_input_chars);
    if text.is_empty() {
        bail!("no text to process in {}: missing text", source_label(args.file.as_deref()));
    }

    let report = hidden::scan(text);
    let rendered = if args.strip {
        hidden::strip(text)
    } else {
        hidden::highlight(text)
    };

    if global_json {
        let output = RevealOutput {
            report,
            text: rendered,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.strip {
        // Keep stdout pipeable: only the cleaned text goes there.
        if !report.is_clean() {
            eprintln!(
                "{} {} hidden characters",
                "Removed".if_supports_color(Stream::Stderr, |t| t.green()),
                report.total
            );
        }
        print!("{rendered}");
        return Ok(());
    }

    if report.is_clean() {
        println!(
            "{}",
            "No hidden characters found.".if_supports_color(Stream::Stdout, |t| t.green())
        );
        return Ok(());
    }

    let kinds: Vec<&str> = report.found.iter().map(|kind| kind.name()).collect();
    println!(
        "{} {} hidden characters: {}",
        "Found".if_supports_color(Stream::Stdout, |t| t.yellow().bold().to_string()),
        report.total,
        kinds.join(", ")
    );
    println!();
    println!("{rendered}");
    Ok(())
}
