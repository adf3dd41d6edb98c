use crate::{RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# rvguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let data = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Approved range: `{}` to `{}`\n- Scanned: {} module(s), {} constraint(s)\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        data.min_version,
        data.max_version,
        data.modules_scanned,
        data.constraints_scanned,
        data.findings_emitted,
        data.findings_total
    ));

    if let Some(r) = &data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}",
            f.severity.label(),
            f.check_id,
            f.code,
            f.message
        ));
        if let Some(loc) = &f.location {
            out.push_str(&format!(" (`{}`)", loc.display()));
        }
        out.push('\n');

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}
