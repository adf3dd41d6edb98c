//! Pure policy evaluation (no IO).
//!
//! The core answers one question: does a `required_version` constraint keep
//! Terraform inside a configured `[min, max]` range? Around it sits the check
//! engine that turns a project model into findings, a verdict, and summary data.

#![forbid(unsafe_code)]

pub mod boundary;
pub mod compliance;
pub mod constraint;
pub mod error;
pub mod model;
pub mod policy;
pub mod report;
pub mod version;

pub mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod test_support;

pub use boundary::{FLOOR_PATCH_SENTINEL, derive_floor_exclusion};
pub use compliance::{
    ComplianceVerdict, ConfiguredRange, DEFAULT_MAX_VERSION, DEFAULT_MIN_VERSION, RangeIssue,
    build_range, check_expression, evaluate_expression,
};
pub use constraint::{Clause, ConstraintExpression, Operator};
pub use engine::evaluate;
pub use error::{ConfigError, ParseError, RangeError};
pub use version::SemanticVersion;
