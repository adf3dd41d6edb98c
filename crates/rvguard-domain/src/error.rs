//! Error types for version parsing and range configuration.
//!
//! Non-compliance is not an error: it is a normal `false` verdict.

use thiserror::Error;

/// A version string or constraint clause that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid version string \"{input}\"")]
    InvalidVersion { input: String },

    #[error("empty version constraint")]
    EmptyConstraint,

    #[error("empty clause in version constraint \"{expression}\"")]
    EmptyClause { expression: String },

    #[error("malformed constraint clause \"{clause}\": invalid version \"{version}\"")]
    InvalidClause { clause: String, version: String },
}

/// A configured range that cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum version configuration cannot be reduced below zero: \"{min}\"")]
    FloorBelowZero { min: String },
}

/// Failure to build a `ConfiguredRange` from configuration strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid min_version: {0}")]
    InvalidMin(ParseError),

    #[error("invalid max_version: {0}")]
    InvalidMax(ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
