//! The `check` use case: resolve config, scan the repository, evaluate, build the report.

use anyhow::Context;
use camino::Utf8Path;
use rvguard_settings::{Overrides, ResolvedConfig, RvguardConfigV1};
use rvguard_types::{RvguardReport, SCHEMA_REPORT_V1, Verdict};
use time::OffsetDateTime;

use crate::report::tool_meta;

#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory holding the root Terraform module.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string when there is no config file).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: RvguardReport,
    pub resolved_config: ResolvedConfig,
}

pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        RvguardConfigV1::default()
    } else {
        rvguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        rvguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let effective = &resolved.effective;

    tracing::info!(
        "Running with min_version: {:?} max_version: {:?}",
        effective.range.min().to_string(),
        effective.range.max().to_string()
    );

    let model = rvguard_repo::build_project_model(input.repo_root, effective.scope)
        .context("build project model")?;
    if model.modules.is_empty() {
        tracing::info!(repo_root = %input.repo_root, "no Terraform files found");
    }

    let rvguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = rvguard_domain::evaluate(&model, effective);

    tracing::info!(
        verdict = ?verdict,
        errors = counts.error,
        warnings = counts.warning,
        "check complete"
    );

    let report = RvguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
