use rvguard_domain::ConfiguredRange;
use rvguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
use rvguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults; anything finer goes in `rvguard.toml`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        scope: Scope::Root,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
        range: ConfiguredRange::default(),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        scope: Scope::Root,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
        range: ConfiguredRange::default(),
    }
}

fn default_checks(severity: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::CHECK_TERRAFORM_REQUIRED_VERSION.to_string(),
        CheckPolicy::enabled(severity),
    );
    m
}
