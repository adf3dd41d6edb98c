use anyhow::Context;
use rvguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use rvguard_types::{
    Finding, RvguardData, RvguardReport, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "rvguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<RvguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse rvguard report")
}

pub fn serialize_report(report: &RvguardReport) -> anyhow::Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(report).context("serialize report")?;
    out.push(b'\n');
    Ok(out)
}

/// JSON schema of the report envelope.
pub fn report_schema() -> schemars::Schema {
    schemars::schema_for!(RvguardReport)
}

pub fn to_renderable(report: &RvguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            min_version: report.data.min_version.clone(),
            max_version: report.data.max_version.clone(),
            modules_scanned: report.data.modules_scanned,
            constraints_scanned: report.data.constraints_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> RvguardReport {
    let now = OffsetDateTime::now_utc();
    RvguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run rvguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: RvguardData {
            findings_total: 1,
            findings_emitted: 1,
            ..RvguardData::default()
        },
    }
}
