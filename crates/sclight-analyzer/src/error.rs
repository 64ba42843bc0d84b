//! Analyzer-internal errors.
//!
//! `EvalError` never crosses the `analyze()` boundary: expression failures
//! collapse to "no value" and every run still returns a usable result.
//! `ConfigError` is for the CLI's configuration loading.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Expression is empty after substitution.
    #[error("empty expression")]
    Empty,

    /// A token the expression grammar cannot use.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(SmolStr),

    /// Expression ended mid-production.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// Trailing tokens after a complete expression.
    #[error("trailing input after expression '{0}'")]
    TrailingInput(SmolStr),

    /// Malformed numeric literal.
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(SmolStr),
}

/// Errors raised while loading analyzer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML.
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
