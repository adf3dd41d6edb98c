use crate::{model::RvguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use rvguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
use rvguard_domain::{DEFAULT_MAX_VERSION, DEFAULT_MIN_VERSION, build_range};
use rvguard_types::{Severity, ids};

/// Command-line overrides; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub scope: Option<String>,
    pub max_findings: Option<u32>,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: RvguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(scope_s) = overrides.scope.clone().or(cfg.scope.clone()) {
        effective.scope = parse_scope(&scope_s)?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    // The range is built once here so a bad bound fails the run before any scanning.
    let check_cfg = cfg.checks.get(ids::CHECK_TERRAFORM_REQUIRED_VERSION);
    let min = first_bound(
        overrides.min_version.as_deref(),
        check_cfg.and_then(|c| c.min_version.as_deref()),
        DEFAULT_MIN_VERSION,
    );
    let max = first_bound(
        overrides.max_version.as_deref(),
        check_cfg.and_then(|c| c.max_version.as_deref()),
        DEFAULT_MAX_VERSION,
    );
    effective.range = build_range(&min, &max).with_context(|| {
        format!(
            "invalid {} range: min_version={min:?} max_version={max:?}",
            ids::CHECK_TERRAFORM_REQUIRED_VERSION
        )
    })?;

    Ok(ResolvedConfig { effective })
}

/// First non-blank bound; a blank string counts as unset.
fn first_bound(over: Option<&str>, configured: Option<&str>, default: &str) -> String {
    [over, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_scope(v: &str) -> anyhow::Result<Scope> {
    match v {
        "root" => Ok(Scope::Root),
        "all" => Ok(Scope::All),
        other => anyhow::bail!("unknown scope: {other} (expected 'root' or 'all')"),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
