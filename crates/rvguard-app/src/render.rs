//! Render use cases over an in-memory report.

use rvguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    rvguard_render::render_markdown(report)
}

/// At most `max` annotations; GitHub only shows the first few per step anyway.
pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    rvguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvguard_render::{
        RenderableData, RenderableFinding, RenderableLocation, RenderableSeverity,
        RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        let finding = |path: &str| RenderableFinding {
            severity: RenderableSeverity::Error,
            check_id: "terraform.required_version".to_string(),
            code: "version_out_of_range".to_string(),
            message: "bad".to_string(),
            location: Some(RenderableLocation {
                path: path.to_string(),
                line: Some(1),
                col: Some(1),
            }),
            help: None,
            url: None,
        };
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![finding("a/versions.tf"), finding("b/versions.tf")],
            data: RenderableData {
                min_version: "1.3".to_string(),
                max_version: "1.5".to_string(),
                modules_scanned: 2,
                constraints_scanned: 2,
                findings_emitted: 2,
                findings_total: 2,
                truncated_reason: None,
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        let annotations = render_annotations(&report, 1);
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].contains("file=a/versions.tf"));
        assert_eq!(render_annotations(&report, 10).len(), 2);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("Verdict: **FAIL**"));
    }
}
