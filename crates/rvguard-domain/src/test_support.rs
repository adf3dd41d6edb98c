use crate::compliance::ConfiguredRange;
use crate::model::{ModuleModel, ProjectModel, RequiredVersionDecl};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
use rvguard_types::{Location, RepoPath, Severity};
use std::collections::BTreeMap;

pub fn decl(file: &str, line: u32, raw: &str) -> RequiredVersionDecl {
    RequiredVersionDecl {
        raw: raw.to_string(),
        location: Some(Location {
            path: RepoPath::new(file),
            line: Some(line),
            col: Some(3),
        }),
    }
}

pub fn module(path: &str, required_versions: Vec<RequiredVersionDecl>) -> ModuleModel {
    let mut files: Vec<RepoPath> = required_versions
        .iter()
        .filter_map(|d| d.location.as_ref().map(|l| l.path.clone()))
        .collect();
    files.sort();
    files.dedup();

    ModuleModel {
        path: RepoPath::new(path),
        files,
        required_versions,
    }
}

pub fn model(modules: Vec<ModuleModel>) -> ProjectModel {
    ProjectModel {
        repo_root: RepoPath::root(),
        modules,
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    config_with_check_allow(check_id, severity, Vec::new())
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut policy = CheckPolicy::enabled(severity);
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);

    EffectiveConfig {
        profile: "test".to_string(),
        scope: Scope::Root,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        range: ConfiguredRange::default(),
    }
}
