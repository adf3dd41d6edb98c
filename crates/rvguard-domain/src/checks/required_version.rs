use super::utils::{build_allowlist, is_allowed};
use crate::compliance::{ConfiguredRange, RangeIssue, check_expression};
use crate::error::ParseError;
use crate::fingerprint::fingerprint_for_constraint;
use crate::model::{ModuleModel, ProjectModel, RequiredVersionDecl};
use crate::policy::{CheckPolicy, EffectiveConfig};
use rvguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(model: &ProjectModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_TERRAFORM_REQUIRED_VERSION) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    let range = &cfg.range;

    for module in model.modules.iter().filter(|m| cfg.scope.includes(m)) {
        if is_allowed(allow.as_ref(), module.path.as_str()) {
            tracing::debug!(module = %module.path, "module exempt by allowlist");
            continue;
        }

        for decl in &module.required_versions {
            let file = decl.location.as_ref().map(|l| l.path.as_str());
            if file.is_some_and(|f| is_allowed(allow.as_ref(), f)) {
                tracing::debug!(file = ?file, "file exempt by allowlist");
                continue;
            }

            match check_expression(range, &decl.raw, decl.location.clone()) {
                Ok(verdict) => {
                    tracing::debug!(
                        expression = %decl.raw,
                        compliant = verdict.compliant,
                        "evaluated required_version"
                    );
                    if let Some(issue) = verdict.into_issue(range) {
                        out.push(out_of_range(policy, range, module, issue));
                    }
                }
                Err(err) => {
                    tracing::debug!(expression = %decl.raw, %err, "unparseable required_version");
                    out.push(invalid_constraint(policy, range, module, decl, &err));
                }
            }
        }
    }
}

fn out_of_range(
    policy: &CheckPolicy,
    range: &ConfiguredRange,
    module: &ModuleModel,
    issue: RangeIssue<Option<Location>>,
) -> Finding {
    let message = issue.message();
    let file = issue.location.as_ref().map(|l| l.path.as_str()).unwrap_or("");

    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_TERRAFORM_REQUIRED_VERSION.to_string(),
        code: ids::CODE_VERSION_OUT_OF_RANGE.to_string(),
        fingerprint: Some(fingerprint_for_constraint(
            ids::CHECK_TERRAFORM_REQUIRED_VERSION,
            ids::CODE_VERSION_OUT_OF_RANGE,
            file,
            &issue.expression,
        )),
        data: json!({
            "expression": issue.expression,
            "min_version": issue.min,
            "max_version": issue.max,
            "floor_exclusion": range.floor_exclusion().to_string(),
            "module": module.path.as_str(),
        }),
        message,
        location: issue.location,
        help: Some(format!(
            "Use a constraint that admits {} or {} and excludes {} and older, e.g. \">= {}\".",
            range.min(),
            range.max(),
            range.floor_exclusion(),
            range.min()
        )),
        url: Some(ids::URL_TERRAFORM_REQUIRED_VERSION.to_string()),
    }
}

fn invalid_constraint(
    policy: &CheckPolicy,
    range: &ConfiguredRange,
    module: &ModuleModel,
    decl: &RequiredVersionDecl,
    err: &ParseError,
) -> Finding {
    let file = decl.location.as_ref().map(|l| l.path.as_str()).unwrap_or("");

    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_TERRAFORM_REQUIRED_VERSION.to_string(),
        code: ids::CODE_INVALID_CONSTRAINT.to_string(),
        message: format!(
            "terraform required_version {:?} is not a valid version constraint: {err}",
            decl.raw
        ),
        location: decl.location.clone(),
        help: Some(
            "Write the constraint as comma-separated clauses such as \">= 1.3, < 2.0\"."
                .to_string(),
        ),
        url: Some(ids::URL_TERRAFORM_REQUIRED_VERSION.to_string()),
        fingerprint: Some(fingerprint_for_constraint(
            ids::CHECK_TERRAFORM_REQUIRED_VERSION,
            ids::CODE_INVALID_CONSTRAINT,
            file,
            &decl.raw,
        )),
        data: json!({
            "expression": decl.raw,
            "min_version": range.min().to_string(),
            "max_version": range.max().to_string(),
            "module": module.path.as_str(),
            "error": err.to_string(),
        }),
    }
}
