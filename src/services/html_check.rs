use crate::domain::constants::{LINE_PREVIEW_CHARS, MOJIBAKE_SEQUENCES};
use crate::domain::models::{DuplicateId, EncodingArtifact, HtmlCheckReport};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

#[derive(thiserror::Error, Debug)]
pub enum HtmlCheckError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("File {path} is not valid UTF-8.")]
    NotUtf8 { path: String },
}

fn id_attr() -> &'static Regex {
    static ID_ATTR: OnceLock<Regex> = OnceLock::new();
    ID_ATTR.get_or_init(|| {
        Regex::new(r#"id=["']([^"']+)["']"#).expect("id attribute regex compiles")
    })
}

/// `id` attribute values seen more than once, in first-occurrence order.
pub fn duplicate_ids(content: &str) -> Vec<DuplicateId> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for cap in id_attr().captures_iter(content) {
        let Some(id) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|id| {
            let count = counts.get(id).copied().unwrap_or(0);
            (count > 1).then(|| DuplicateId {
                id: id.to_string(),
                count,
            })
        })
        .collect()
}

fn preview(line: &str) -> String {
    line.trim().chars().take(LINE_PREVIEW_CHARS).collect()
}

/// Lines (1-based) holding text that was UTF-8 decoded as a single-byte charset.
pub fn encoding_artifacts(content: &str) -> Vec<EncodingArtifact> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let sequence = MOJIBAKE_SEQUENCES.iter().find(|s| line.contains(*s))?;
            Some(EncodingArtifact {
                line: idx + 1,
                sequence: sequence.to_string(),
                preview: preview(line),
            })
        })
        .collect()
}

pub fn check_html(path: &str, content: &str) -> HtmlCheckReport {
    HtmlCheckReport {
        path: path.to_string(),
        duplicate_ids: duplicate_ids(content),
        encoding_artifacts: encoding_artifacts(content),
    }
}

pub fn check_html_file(path: &Path) -> Result<HtmlCheckReport, HtmlCheckError> {
    let name = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| HtmlCheckError::Io {
        path: name.clone(),
        source,
    })?;
    let content =
        String::from_utf8(bytes).map_err(|_| HtmlCheckError::NotUtf8 { path: name.clone() })?;
    tracing::debug!(path = %name, bytes = content.len(), "checking html");
    Ok(check_html(&name, &content))
}
