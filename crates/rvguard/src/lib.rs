//! Decide whether a Terraform `required_version` constraint stays inside an
//! approved version range.
//!
//! ```
//! let range = rvguard::build_range("1.3", "1.5")?;
//!
//! let ok = rvguard::check_expression(&range, ">= 1.3, < 2.0", "versions.tf:2")?;
//! assert!(ok.compliant);
//!
//! let bad = rvguard::check_expression(&range, ">= 1.0", "versions.tf:2")?;
//! let issue = bad.into_issue(&range).expect("reaches below 1.3");
//! assert_eq!(issue.min, "1.3");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use rvguard_domain::{
    Clause, ComplianceVerdict, ConfigError, ConfiguredRange, ConstraintExpression,
    DEFAULT_MAX_VERSION, DEFAULT_MIN_VERSION, FLOOR_PATCH_SENTINEL, Operator, ParseError,
    RangeError, RangeIssue, SemanticVersion, build_range, check_expression,
    derive_floor_exclusion, evaluate_expression,
};

/// Policy engine over a whole project model.
pub mod engine {
    pub use rvguard_domain::evaluate;
    pub use rvguard_domain::model::{ModuleModel, ProjectModel, RequiredVersionDecl};
    pub use rvguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
    pub use rvguard_domain::report::{DomainReport, SeverityCounts};
}
