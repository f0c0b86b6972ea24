//! Error types for plainly-core.
//!
//! The scoring and rewriting pipelines are total and never fail; these errors
//! belong to the configuration layer and to callers validating raw input.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while accepting raw input text from a caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input is empty once sanitized.
    #[error("missing text")]
    MissingText,
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
