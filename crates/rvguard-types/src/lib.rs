//! Stable DTOs and IDs shared across the rvguard workspace.
//!
//! Nothing in here evaluates policy:
//! - data types for the emitted report
//! - stable check ids and finding codes
//! - repo-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::RepoPath;
pub use receipt::{
    Finding, Location, RvguardData, RvguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict,
};
