use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow commands.
///
/// Format: `::{level} file={path},line={line},col={col}::[{check_id}:{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| {
            let level = match f.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
                RenderableSeverity::Info => "notice",
            };

            let mut props: Vec<String> = Vec::new();
            if let Some(loc) = &f.location {
                props.push(format!("file={}", escape_property(&loc.path)));
                if let Some(line) = loc.line {
                    props.push(format!("line={line}"));
                }
                if let Some(col) = loc.col {
                    props.push(format!("col={col}"));
                }
            }

            let message = escape_data(&format!("[{}:{}] {}", f.check_id, f.code, f.message));
            if props.is_empty() {
                format!("::{level}::{message}")
            } else {
                format!("::{level} {}::{message}", props.join(","))
            }
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
