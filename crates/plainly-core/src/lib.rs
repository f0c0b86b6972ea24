//! Core library for plainly.
//!
//! This crate scores text for AI-sounding patterns, rewrites it into plainer
//! prose, and finds invisible Unicode characters. The `plainly` CLI and MCP
//! server are thin front ends over it.
//!
//! # Modules
//!
//! - [`likelihood`] - Heuristic AI-likelihood scoring
//! - [`rewrite`] - The humanizer pipeline
//! - [`hidden`] - Hidden character detection
//! - [`sanitize`] - Input cleanup and limits
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use plainly_core::{HumanizeOptions, humanize, score_ai_likelihood};
//!
//! let text = "As an AI language model, I am happy to help. In conclusion, it works.";
//! let report = score_ai_likelihood(text);
//! println!("{} ({})", report.score, report.band);
//!
//! let plain = humanize(text, &HumanizeOptions::default());
//! assert_eq!(plain, "I'm happy to help. It works.");
//! ```
#![deny(unsafe_code)]

pub mod case;
pub mod config;
pub mod error;
pub mod hidden;
pub mod likelihood;
pub mod rewrite;
pub mod sanitize;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use hidden::{HiddenCharKind, HiddenCharReport};
pub use likelihood::{Band, LikelihoodReport, score_ai_likelihood};
pub use rewrite::{HumanizeOptions, Strength, Tone, humanize};
pub use sanitize::{DEFAULT_MAX_INPUT_CHARS, accept_input, sanitize_text};
