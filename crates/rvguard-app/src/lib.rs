//! Use case orchestration for rvguard.
//!
//! The application layer coordinates settings, repo, domain, and render. The
//! CLI crate depends on this and only handles argument parsing, file I/O, and
//! exit codes.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown};
pub use report::{
    parse_report_json, report_schema, runtime_error_report, serialize_report, to_renderable,
};
