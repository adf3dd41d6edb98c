use super::required_version;
use crate::compliance::build_range;
use crate::policy::{CheckPolicy, Scope};
use crate::test_support::{config_with_check, config_with_check_allow, decl, model, module};
use rvguard_types::{Severity, ids};

#[test]
fn reports_out_of_range_with_message_location_and_data() {
    let cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    let model = model(vec![module(".", vec![decl("versions.tf", 2, ">= 1.0")])]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 1);
    let finding = &out[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.check_id, ids::CHECK_TERRAFORM_REQUIRED_VERSION);
    assert_eq!(finding.code, ids::CODE_VERSION_OUT_OF_RANGE);
    assert_eq!(
        finding.message,
        r#"required_version is not inclusive of the minimum "1.3" and maximum "1.5" terraform required_version: ">= 1.0""#
    );
    let loc = finding.location.as_ref().expect("location");
    assert_eq!(loc.path.as_str(), "versions.tf");
    assert_eq!(loc.line, Some(2));
    assert_eq!(finding.data["expression"], ">= 1.0");
    assert_eq!(finding.data["floor_exclusion"], "1.2.999");
    assert_eq!(finding.data["module"], ".");
    assert_eq!(
        finding.url.as_deref(),
        Some(ids::URL_TERRAFORM_REQUIRED_VERSION)
    );
    assert!(finding.fingerprint.is_some());
}

#[test]
fn compliant_constraints_emit_nothing() {
    let cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    let model = model(vec![module(
        ".",
        vec![
            decl("a.tf", 1, ">= 1.3, < 2.0"),
            decl("b.tf", 1, "~> 1.4"),
            decl("c.tf", 1, ">= 1.3"),
        ],
    )]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert!(out.is_empty(), "unexpected findings: {out:?}");
}

#[test]
fn malformed_constraint_is_its_own_code() {
    let cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Warning);
    let model = model(vec![module(
        ".",
        vec![decl("main.tf", 1, ">= abc"), decl("main.tf", 7, ">= 0.12")],
    )]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].code, ids::CODE_INVALID_CONSTRAINT);
    assert_eq!(out[0].severity, Severity::Warning);
    assert!(out[0].message.contains("\"abc\""));
    assert!(out[0].data["error"].as_str().unwrap().contains("abc"));
    assert_eq!(out[1].code, ids::CODE_VERSION_OUT_OF_RANGE);
}

#[test]
fn every_location_is_reported_separately() {
    let cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    let model = model(vec![module(
        ".",
        vec![decl("a.tf", 1, ">= 1.0"), decl("b.tf", 1, ">= 1.0")],
    )]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 2);
    assert_ne!(out[0].fingerprint, out[1].fingerprint);
}

#[test]
fn root_scope_skips_child_modules_and_all_scope_includes_them() {
    let mut cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    let model = model(vec![
        module(".", vec![decl("main.tf", 1, ">= 1.3")]),
        module("modules/vpc", vec![decl("modules/vpc/main.tf", 1, ">= 0.13")]),
    ]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert!(out.is_empty());

    cfg.scope = Scope::All;
    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data["module"], "modules/vpc");
}

#[test]
fn allowlist_exempts_modules_and_files() {
    let mut cfg = config_with_check_allow(
        ids::CHECK_TERRAFORM_REQUIRED_VERSION,
        Severity::Error,
        vec!["examples/**", "legacy.tf"],
    );
    cfg.scope = Scope::All;
    let model = model(vec![
        module(
            ".",
            vec![decl("legacy.tf", 1, ">= 0.12"), decl("main.tf", 1, ">= 0.12")],
        ),
        module(
            "examples/simple",
            vec![decl("examples/simple/main.tf", 1, ">= 0.12")],
        ),
    ]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].location.as_ref().unwrap().path.as_str(),
        "main.tf"
    );
}

#[test]
fn disabled_check_emits_nothing() {
    let mut cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    cfg.checks.insert(
        ids::CHECK_TERRAFORM_REQUIRED_VERSION.to_string(),
        CheckPolicy::disabled(),
    );
    let model = model(vec![module(".", vec![decl("main.tf", 1, ">= 0.12")])]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn configured_range_drives_message_bounds() {
    let mut cfg = config_with_check(ids::CHECK_TERRAFORM_REQUIRED_VERSION, Severity::Error);
    cfg.range = build_range("1.0", "2.0").expect("range");
    let model = model(vec![module(
        ".",
        vec![decl("main.tf", 1, ">= 1.0"), decl("main.tf", 5, ">= 0.15")],
    )]);

    let mut out = Vec::new();
    required_version::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains(r#"minimum "1.0" and maximum "2.0""#));
    assert_eq!(out[0].data["floor_exclusion"], "0.999.999");
}
