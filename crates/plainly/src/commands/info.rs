//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use plainly_core::config::{self, Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when the limit is disabled.
    max_input_chars: Option<usize>,
    tone: &'static str,
    strength: &'static str,
    contractions: bool,
    soften_run_ons: bool,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: config::user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_chars: config.input_limit(),
            tone: config.tone.as_str(),
            strength: config.strength.as_str(),
            contractions: config.contractions,
            soften_run_ons: config.soften_run_ons,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", label("License"), package.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", heading("Configuration"));
    match cfg.config_file {
        Some(ref path) => println!(
            "{}: {}",
            label("Config file"),
            path.if_supports_color(Stream::Stdout, |t| t.cyan())
        ),
        None => println!(
            "{}: {}",
            label("Config file"),
            "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow())
        ),
    }
    if let Some(ref dir) = cfg.user_config_dir {
        println!("{}: {}", label("User config dir"), dir);
    }
    println!("{}: {}", label("Log level"), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", label("Log directory"), dir);
    }
    match cfg.max_input_chars {
        Some(max) => println!("{}: {max} chars", label("Input limit")),
        None => println!(
            "{}: {}",
            label("Input limit"),
            "disabled".if_supports_color(Stream::Stdout, |t| t.yellow())
        ),
    }

    println!();
    println!("{}", heading("Humanize Defaults"));
    println!("{}: {}", label("Tone"), cfg.tone);
    println!("{}: {}", label("Strength"), cfg.strength);
    println!("{}: {}", label("Contractions"), on_off(cfg.contractions));
    println!("{}: {}", label("Soften run-ons"), on_off(cfg.soften_run_ons));

    Ok(())
}

fn heading(title: &str) -> String {
    title
        .if_supports_color(Stream::Stdout, |t| t.bold().underline().to_string())
        .to_string()
}

fn label(name: &str) -> String {
    name.if_supports_color(Stream::Stdout, |t| t.dimmed().to_string())
        .to_string()
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainly_core::{Strength, Tone};

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.tone, "neutral");
        assert_eq!(info.max_input_chars, Some(plainly_core::DEFAULT_MAX_INPUT_CHARS));
    }

    #[test]
    fn config_info_reflects_overrides() {
        let config = Config {
            tone: Tone::Professional,
            strength: Strength::Strong,
            disable_input_limit: true,
            contractions: false,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.tone, "professional");
        assert_eq!(info.strength, "strong");
        assert!(info.max_input_chars.is_none());
        assert!(!info.contractions);
    }
}
