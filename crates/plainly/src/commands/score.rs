//! Score command: AI-likelihood estimate for a text.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use plainly_core::Band;
use plainly_core::likelihood::{self, LikelihoodReport, LikelihoodSignals};

use super::{read_input, source_label};

/// Band at which `--fail-on` makes the command exit non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FailOn {
    /// Fail on Low, Medium, or High.
    Low,
    /// Fail on Medium or High.
    Medium,
    /// Fail on High only.
    High,
}

impl FailOn {
    const fn band(self) -> Band {
        match self {
            Self::Low => Band::Low,
            Self::Medium => Band::Medium,
            Self::High => Band::High,
        }
    }

    /// True when `band` is at or above this threshold.
    pub fn reached_by(self, band: Band) -> bool {
        band >= self.band()
    }
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score (stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Show the signals behind the score.
    #[arg(long)]
    pub details: bool,

    /// Exit non-zero when the band reaches this level.
    #[arg(long, value_enum, value_name = "BAND")]
    pub fail_on: Option<FailOn>,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    #[serde(flatten)]
    report: &'a LikelihoodReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    signals: Option<&'a LikelihoodSignals>,
}

/// Score a text for AI-sounding patterns.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    max_input_chars: Option<usize>,
) -> anyhow::Result<()> {
    debug!(details = args.details, fail_on = ?args.fail_on, "executing score command");

    let text = read_input(args.file.as_deref(), max_input_chars)?;
    let signals = likelihood::analyze_signals(&text);
    let report = likelihood::score_signals(&signals);

    if global_json {
        let output = ScoreOutput {
            report: &report,
            signals: args.details.then_some(&signals),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report);
        if args.details {
            print_signals(&signals);
        }
    }

    if let Some(level) = args.fail_on
        && level.reached_by(report.band)
    {
        bail!(
            "{} scores {} ({}), at or above --fail-on {:?}",
            source_label(args.file.as_deref()),
            report.score,
            report.band,
            level,
        );
    }

    Ok(())
}

fn print_report(report: &LikelihoodReport) {
    let band = match report.band {
        Band::High => paint(report.band.as_str(), |t| t.red().bold().to_string()),
        Band::Medium => paint(report.band.as_str(), |t| t.yellow().to_string()),
        Band::Low => paint(report.band.as_str(), |t| t.green().to_string()),
        Band::Unscored => paint(report.band.as_str(), |t| t.dimmed().to_string()),
    };
    println!(
        "{}: {}/100 ({band})",
        paint("AI likelihood", |t| t.bold().to_string()),
        report.score
    );
    if !report.reasons.is_empty() {
        println!();
        for reason in &report.reasons {
            println!("  - {reason}");
        }
    }
}

fn print_signals(s: &LikelihoodSignals) {
    println!();
    println!("{}", paint("Signals", |t| t.bold().underline().to_string()));
    println!("{}: {}", label("Boilerplate phrases"), s.strong_hits);
    println!("{}: {}", label("Formal fillers"), s.weak_hits);
    println!("{}: {}", label("Words"), s.word_count);
    println!("{}: {}", label("Sentences"), s.sentence_count);
    println!("{}: {:.2}", label("Uniformity"), s.uniformity);
    println!("{}: {:.3}", label("Transition rate"), s.transition_rate);
    println!("{}: {}", label("List lines"), s.bullet_lines);
    println!("{}: {}", label("Repeated trigrams"), s.repeated_trigrams);
}

/// Style stdout text, leaving it plain when colors are off.
fn paint(text: &str, style: impl Fn(&str) -> String) -> String {
    text.if_supports_color(Stream::Stdout, |t| style(t)).to_string()
}

fn label(name: &str) -> String {
    paint(name, |t| t.dimmed().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_on_thresholds() {
        assert!(FailOn::Medium.reached_by(Band::High));
        assert!(FailOn::Medium.reached_by(Band::Medium));
        assert!(!FailOn::Medium.reached_by(Band::Low));
        assert!(!FailOn::Low.reached_by(Band::Unscored));
        assert!(FailOn::Low.reached_by(Band::Low));
    }

    #[test]
    fn output_flattens_report() {
        let report = LikelihoodReport {
            score: 12,
            band: Band::Low,
            reasons: vec!["Short text".to_string()],
        };
        let output = ScoreOutput {
            report: &report,
            signals: None,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["score"], 12);
        assert_eq!(json["band"], "Low");
        assert!(json.get("signals").is_none());
    }
}
