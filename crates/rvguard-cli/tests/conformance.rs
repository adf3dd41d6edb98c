//! Conformance: every check id and code is explained, and the CLI surfaces
//! (`explain`, `schema`) agree with the registry.

use assert_cmd::Command;
use predicates::prelude::*;
use rvguard_types::{explain, ids};
use serde_json::Value;

#[allow(deprecated)]
fn rvguard_cmd() -> Command {
    Command::cargo_bin("rvguard").unwrap()
}

#[test]
fn all_check_ids_and_codes_have_explanations() {
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        let exp = explain::lookup_explanation(id)
            .unwrap_or_else(|| panic!("'{id}' has no explanation in registry"));
        assert!(!exp.title.is_empty(), "'{id}' has empty title");
        assert!(!exp.description.is_empty(), "'{id}' has empty description");
        assert!(!exp.remediation.is_empty(), "'{id}' has empty remediation");
        assert!(!exp.examples.before.is_empty(), "'{id}' has no before example");
        assert!(!exp.examples.after.is_empty(), "'{id}' has no after example");
    }
}

#[test]
fn explain_prints_known_check() {
    rvguard_cmd()
        .args(["explain", ids::CHECK_TERRAFORM_REQUIRED_VERSION])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_lists_available_ids() {
    rvguard_cmd()
        .args(["explain", "terraform.unknown_rule"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown check_id or code"))
        .stderr(predicate::str::contains(ids::CHECK_TERRAFORM_REQUIRED_VERSION));
}

#[test]
fn schema_commands_emit_json() {
    for (kind, needle) in [("report", "findings"), ("config", "min_version")] {
        let output = rvguard_cmd()
            .args(["schema", kind])
            .output()
            .expect("run rvguard schema");
        assert!(output.status.success(), "schema {kind} failed");
        let schema: Value = serde_json::from_slice(&output.stdout).expect("schema is JSON");
        assert!(schema.is_object());
        assert!(
            schema.to_string().contains(needle),
            "schema {kind} should mention {needle}"
        );
    }
}
