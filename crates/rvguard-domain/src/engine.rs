use crate::checks;
use crate::model::ProjectModel;
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, SeverityCounts};
use rvguard_types::{Finding, RvguardData, Severity};

pub fn evaluate(model: &ProjectModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    // Truncation limits what is emitted, never the verdict.
    let counts = SeverityCounts::from_findings(&findings);
    let verdict = counts.verdict(cfg.fail_on);

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let in_scope: Vec<_> = model
        .modules
        .iter()
        .filter(|m| cfg.scope.includes(m))
        .collect();

    let data = RvguardData {
        scope: cfg.scope.as_str().to_string(),
        profile: cfg.profile.clone(),
        min_version: cfg.range.min().to_string(),
        max_version: cfg.range.max().to_string(),
        modules_scanned: in_scope.len() as u32,
        constraints_scanned: in_scope
            .iter()
            .map(|m| m.required_versions.len() as u32)
            .sum(),
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // severity (error first), path, line (missing last), check_id, code, message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
