use crate::domain::constants::{ABSENT, ELLIPSIS};
use crate::domain::models::{Finding, JsonOut, MetricDisplay};
use serde::Serialize;
use std::borrow::Cow;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in render(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn section(title: &str) -> String {
    format!("--- {} ---", title)
}

pub fn or_absent(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}

pub fn format_score(score: Option<f64>) -> String {
    score
        .map(|s| s.to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

/// Cuts `text` to `limit` characters, marking the cut with `...`.
pub fn truncate_summary(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
    }
}

pub fn metric_line(m: &MetricDisplay) -> String {
    format!(
        "{}: {} (Score: {})",
        or_absent(m.title.as_deref()),
        or_absent(m.display_value.as_deref()),
        format_score(m.score)
    )
}

/// Message line plus any explanation/details lines, details cut to `details_limit`.
pub fn finding_lines(f: &Finding, details_limit: usize) -> Vec<String> {
    let mut lines = vec![f.message.clone()];
    if let Some(explanation) = &f.explanation {
        lines.push(format!("Explanation: {}", explanation));
    }
    if let Some(details) = &f.details {
        lines.push(format!(
            "Details: {}",
            truncate_summary(details, details_limit)
        ));
    }
    lines
}
