use crate::services::navigator::{self, json_path};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A parsed Lighthouse report. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Report {
    root: Value,
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        source: std::string::FromUtf8Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Report {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn audit(&self, id: &str) -> Option<&Value> {
        let audit = navigator::lookup(&self.root, json_path!["audits", id]);
        if audit.is_none() {
            tracing::trace!(audit = id, "audit absent from report");
        }
        audit
    }

    pub fn audit_score(&self, id: &str) -> Option<f64> {
        navigator::get_f64(&self.root, json_path!["audits", id, "score"])
    }

    pub fn audit_items(&self, id: &str) -> &[Value] {
        navigator::get_items(&self.root, json_path!["audits", id, "details", "items"])
    }
}

pub fn load_report(path: &Path) -> Result<Report, LoadError> {
    let source_name = path.display().to_string();
    tracing::debug!(path = %source_name, "loading report");
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: source_name.clone(),
        source,
    })?;
    load_report_from_reader(file, &source_name)
}

pub fn load_report_from_reader<R: Read>(
    mut reader: R,
    source_name: &str,
) -> Result<Report, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            path: source_name.to_string(),
            source,
        })?;
    let text = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
        path: source_name.to_string(),
        source,
    })?;
    let root: Value = serde_json::from_str(text.trim_start_matches('\u{feff}')).map_err(
        |source| LoadError::Parse {
            path: source_name.to_string(),
            source,
        },
    )?;
    tracing::debug!(source = source_name, "report parsed");
    Ok(Report::from_value(root))
}
