use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    Pass,
    Fail,
}

impl AuditStatus {
    /// Only an exact numeric 1 is a pass; scores are continuous in [0, 1].
    pub fn from_score(score: Option<f64>) -> Self {
        if score == Some(1.0) {
            AuditStatus::Pass
        } else {
            AuditStatus::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == AuditStatus::Pass
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Pass => "PASS",
            AuditStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub id: String,
    pub title: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDisplay {
    pub id: String,
    pub title: Option<String>,
    pub display_value: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PwaCheck {
    pub id: String,
    pub label: String,
    pub status: AuditStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Accessibility,
    Pwa,
    Performance,
}

impl FindingKind {
    pub fn heading(self) -> &'static str {
        match self {
            FindingKind::Accessibility => "ACCESSIBILITY FAILURES",
            FindingKind::Pwa => "PWA AUDIT DETAILS",
            FindingKind::Performance => "OPPORTUNITIES",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Measure {
    Score(Option<f64>),
    Count(usize),
    Kilobytes(f64),
    Informational,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub audit_id: String,
    pub measure: Measure,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Compact JSON of the audit's `details`, stored untruncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Finding {
    pub fn new(kind: FindingKind, audit_id: &str, measure: Measure, message: String) -> Self {
        Self {
            kind,
            audit_id: audit_id.to_string(),
            measure,
            message,
            snippet: None,
            explanation: None,
            details: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub scores: Vec<CategoryScore>,
    pub pwa: Vec<PwaCheck>,
    pub metrics: Vec<MetricDisplay>,
    pub opportunities: Vec<Finding>,
}

#[derive(Debug, Serialize)]
pub struct AccessibilityReport {
    pub color_contrast: AuditStatus,
    pub color_contrast_score: Option<f64>,
    pub failures: Vec<Finding>,
    pub lcp_element: Option<Finding>,
    pub preload: Option<Finding>,
}

#[derive(Debug, Serialize)]
pub struct PwaReport {
    pub categories: Vec<String>,
    pub pwa_category: Option<serde_json::Value>,
    pub audits: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateId {
    pub id: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodingArtifact {
    pub line: usize,
    pub sequence: String,
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct HtmlCheckReport {
    pub path: String,
    pub duplicate_ids: Vec<DuplicateId>,
    pub encoding_artifacts: Vec<EncodingArtifact>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub metrics: MetricsSection,
    #[serde(default)]
    pub pwa: PwaSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReportSection {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MetricsSection {
    #[serde(default)]
    pub ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PwaSection {
    #[serde(default)]
    pub audits: Option<Vec<String>>,
    #[serde(default)]
    pub details_limit: Option<usize>,
}
