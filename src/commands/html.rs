use crate::domain::models::HtmlCheckReport;
use crate::services::html_check::check_html_file;
use crate::services::output::print_one;
use std::path::Path;

pub fn handle_check_html(json: bool, path: &Path) -> anyhow::Result<()> {
    let report = check_html_file(path)?;
    print_one(json, report, html_check_lines)
}

fn html_check_lines(r: &HtmlCheckReport) -> Vec<String> {
    let mut lines = Vec::new();
    if r.duplicate_ids.is_empty() {
        lines.push("No duplicate IDs found.".to_string());
    } else {
        lines.push("Duplicate IDs found:".to_string());
        lines.extend(r.duplicate_ids.iter().map(|d| format!("  - {}", d.id)));
    }
    lines.push(String::new());
    if r.encoding_artifacts.is_empty() {
        lines.push("No suspicious encoding artifacts found.".to_string());
    } else {
        lines.push("Suspicious encoding artifacts found:".to_string());
        lines.extend(r.encoding_artifacts.iter().map(|a| {
            format!("  Line {}: Contains '{}' -> {}", a.line, a.sequence, a.preview)
        }));
    }
    lines
}
