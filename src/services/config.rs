use crate::cli::{DEFAULT_CONFIG_PATH, DEFAULT_REPORT_PATH};
use crate::domain::constants::{DETAILS_SUMMARY_LIMIT, PERFORMANCE_METRICS, PWA_AUDITS};
use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {}", .source.message())]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Effective settings for one run: config file values with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub report_path: PathBuf,
    pub metrics: Vec<String>,
    pub pwa_audits: Vec<String>,
    pub details_limit: usize,
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

impl Settings {
    pub fn resolve(file: ConfigFile, report_override: Option<PathBuf>) -> Self {
        Settings {
            report_path: report_override
                .or(file.report.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            metrics: file.metrics.ids.unwrap_or_else(|| owned(&PERFORMANCE_METRICS)),
            pwa_audits: file.pwa.audits.unwrap_or_else(|| owned(&PWA_AUDITS)),
            details_limit: file.pwa.details_limit.unwrap_or(DETAILS_SUMMARY_LIMIT),
        }
    }
}

pub fn parse_config(raw: &str, source_name: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: source_name.to_string(),
        source,
    })
}

/// An explicit path must exist; the implicit `./lhdiag.toml` is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.display().to_string())),
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !p.exists() {
                return Ok(ConfigFile::default());
            }
            p
        }
    };
    let source_name = path.display().to_string();
    tracing::debug!(path = %source_name, "loading config");
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: source_name.clone(),
        source,
    })?;
    parse_config(&raw, &source_name)
}
