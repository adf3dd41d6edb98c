use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for rvguard reports.
pub const SCHEMA_REPORT_V1: &str = "rvguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending across runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// rvguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct RvguardData {
    pub scope: String,
    pub profile: String,

    /// Effective bounds the constraints were evaluated against.
    pub min_version: String,
    pub max_version: String,

    pub modules_scanned: u32,
    pub constraints_scanned: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// Report envelope with a stable outer shape and tool-specific `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = RvguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type RvguardReport = ReportEnvelope<RvguardData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_and_verdict_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), json!("warning"));
        assert_eq!(serde_json::to_value(Verdict::Fail).unwrap(), json!("fail"));
    }

    #[test]
    fn finding_omits_empty_optionals() {
        let finding = Finding {
            severity: Severity::Error,
            check_id: "terraform.required_version".to_string(),
            code: "version_out_of_range".to_string(),
            message: "bad".to_string(),
            location: Some(Location {
                path: RepoPath::new("main.tf"),
                line: Some(2),
                col: None,
            }),
            help: None,
            url: None,
            fingerprint: None,
            data: JsonValue::Null,
        };

        let value = serde_json::to_value(&finding).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("help"));
        assert!(!obj.contains_key("data"));
        assert_eq!(value["location"], json!({"path": "main.tf", "line": 2}));
    }
}
