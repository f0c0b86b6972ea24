//! Humanize command: rewrite text into plainer prose.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use plainly_core::config::Config;
use plainly_core::{HumanizeOptions, Strength, Tone, humanize};

use super::read_input;

/// Arguments for the `humanize` subcommand.
#[derive(Args, Debug)]
pub struct HumanizeArgs {
    /// File to rewrite (stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Tone: neutral, friendly, professional, confident, or concise.
    #[arg(long)]
    pub tone: Option<String>,

    /// Strength: light, medium, or strong.
    #[arg(long)]
    pub strength: Option<String>,

    /// Leave "do not", "I am" and friends uncontracted.
    #[arg(long)]
    pub no_contractions: bool,

    /// Keep long sentences whole.
    #[arg(long)]
    pub no_soften_run_ons: bool,

    /// Write the result to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// JSON shape of a humanize result.
#[derive(Debug, Serialize)]
pub struct HumanizeOutput {
    /// The rewritten text.
    pub humanized: String,
    /// Tone that was applied.
    pub tone: Tone,
    /// Strength that was applied.
    pub strength: Strength,
}

/// Parse a tone name, warning and falling back to neutral when unknown.
pub fn tone_or_default(name: &str) -> Tone {
    Tone::from_name(name).unwrap_or_else(|| {
        warn!(tone = name, fallback = %Tone::default(), "unknown tone");
        Tone::default()
    })
}

/// Parse a strength name, warning and falling back to light when unknown.
pub fn strength_or_default(name: &str) -> Strength {
    Strength::from_name(name).unwrap_or_else(|| {
        warn!(strength = name, fallback = %Strength::default(), "unknown strength");
        Strength::default()
    })
}

/// Merge command-line overrides onto the configured defaults.
fn resolve_options(args: &HumanizeArgs, config: &Config) -> HumanizeOptions {
    let mut options = config.humanize_options();
    if let Some(ref tone) = args.tone {
        options.tone = tone_or_default(tone);
    }
    if let Some(ref strength) = args.strength {
        options.strength = strength_or_default(strength);
    }
    if args.no_contractions {
        options.contractions = false;
    }
    if args.no_soften_run_ons {
        options.soften_run_ons = false;
    }
    options
}

/// Rewrite a text with the humanizer pipeline.
#[instrument(name = "cmd_humanize", skip_all, fields(file = ?args.file))]
pub fn cmd_humanize(
    args: HumanizeArgs,
    global_json: bool,
    config: &Config,
    max_input_chars: Option<usize>,
) -> anyhow::Result<()> {
    let options = resolve_options(&args, config);
    debug!(?options, "executing humanize command");

    let text = read_input(args.file.as_deref(), max_input_chars)?;
    let output = HumanizeOutput {
        humanized: humanize(&text, &options),
        tone: options.tone,
        strength: options.strength,
    };

    let rendered = if global_json {
        serde_json::to_string_pretty(&output)?
    } else {
        output.humanized
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path.as_std_path(), format!("{rendered}\n"))
                .with_context(|| format!("failed to write {path}"))?;
            if !global_json {
                eprintln!(
                    "{} {path}",
                    "Wrote".if_supports_color(Stream::Stderr, |t| t.green())
                );
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
