//! Logging setup for the binary.
//!
//! Human-readable logs go to stderr so stdout stays clean for command output.
//! When a log file is configured, every event is also written there as one
//! JSON object per line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "PLAINLY_LOG_PATH";
const LOG_DIR_ENV: &str = "PLAINLY_LOG_DIR";
const LOG_FILE_NAME: &str = "plainly.jsonl";

/// Where (if anywhere) to write the JSONL log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `plainly.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `PLAINLY_LOG_PATH` / `PLAINLY_LOG_DIR`, falling back to the
    /// configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: env_path(LOG_PATH_ENV),
            log_dir: env_path(LOG_DIR_ENV).or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, if file logging is on.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Keeps the background log writer alive; drop it last.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Filter directive for the CLI verbosity flags.
fn verbosity_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter. `RUST_LOG` wins over everything else.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(quiet, verbose, config_level)))
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(verbosity_directive(true, 2, "info"), "error");
    }

    #[test]
    fn verbose_levels() {
        assert_eq!(verbosity_directive(false, 0, "warn"), "warn");
        assert_eq!(verbosity_directive(false, 1, "warn"), "debug");
        assert_eq!(verbosity_directive(false, 3, "warn"), "trace");
    }

    #[test]
    fn no_file_logging_by_default() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/custom.jsonl")),
            log_dir: Some(PathBuf::from("/tmp/ignored")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/var/log"), "custom.jsonl".to_string()))
        );
    }

    #[test]
    fn bare_file_name_logs_to_cwd() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            log_dir: None,
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), "run.jsonl".to_string()))
        );
    }

    #[test]
    fn log_dir_uses_default_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/plainly")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/tmp/plainly"), LOG_FILE_NAME.to_string()))
        );
    }
}
