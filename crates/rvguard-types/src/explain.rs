//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_TERRAFORM_REQUIRED_VERSION => Some(explain_required_version()),

        ids::CODE_VERSION_OUT_OF_RANGE => Some(explain_version_out_of_range()),
        ids::CODE_INVALID_CONSTRAINT => Some(explain_invalid_constraint()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_TERRAFORM_REQUIRED_VERSION]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_VERSION_OUT_OF_RANGE, ids::CODE_INVALID_CONSTRAINT]
}

fn explain_required_version() -> Explanation {
    Explanation {
        title: "Terraform required_version Range",
        description: "\
Checks that the `required_version` constraint of the root module's `terraform`
block stays inside the approved Terraform range (`min_version`..`max_version`,
default 1.3..1.5).

A constraint is accepted when it admits the configured minimum or the configured
maximum, and does not admit the highest patch release of the minor version just
below the minimum (e.g. 1.2.999 for a minimum of 1.3). Constraints that reach
below the minimum let modules run on Terraform releases that the samples are not
tested against.",
        remediation: "\
Tighten the constraint so it starts at the approved minimum:

    required_version = \">= 1.3\"

Ranges and pessimistic constraints work as long as they exclude older releases:

    required_version = \">= 1.3, < 2.0\"
    required_version = \"~> 1.4\"

The approved range is configured in rvguard.toml:

    [checks.\"terraform.required_version\"]
    min_version = \"1.3\"
    max_version = \"1.5\"",
        examples: ExamplePair {
            before: r#"terraform {
  required_version = ">= 0.13"
}"#,
            after: r#"terraform {
  required_version = ">= 1.3"
}"#,
        },
    }
}

fn explain_version_out_of_range() -> Explanation {
    let mut exp = explain_required_version();
    exp.title = "required_version Out Of Range";
    exp
}

fn explain_invalid_constraint() -> Explanation {
    Explanation {
        title: "Invalid required_version Constraint",
        description: "\
The `required_version` string could not be parsed as a version constraint.

Constraints are comma-separated clauses. Each clause is an optional operator
(`=`, `!=`, `>`, `>=`, `<`, `<=`, `~>`) followed by a version with at least a
major and a minor component, e.g. `>= 1.3, < 2.0`. Terraform itself refuses
to load a module whose constraint does not parse.",
        remediation: "\
Rewrite the constraint with numeric versions and supported operators:

    required_version = \">= 1.3\"",
        examples: ExamplePair {
            before: r#"terraform {
  required_version = ">= latest"
}"#,
            after: r#"terraform {
  required_version = ">= 1.3"
}"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id_and_code() {
        assert!(lookup_explanation(ids::CHECK_TERRAFORM_REQUIRED_VERSION).is_some());
        assert!(lookup_explanation(ids::CODE_VERSION_OUT_OF_RANGE).is_some());
        assert!(lookup_explanation(ids::CODE_INVALID_CONSTRAINT).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.check").is_none());
        assert!(lookup_explanation(ids::CHECK_TOOL_RUNTIME).is_none());
    }

    #[test]
    fn registry_lists_resolve() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "{id} should be in registry");
        }
    }
}
