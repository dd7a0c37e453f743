//! Rules that turn a report into findings.
//!
//! Each rule is independent and reads the report through the navigator, so an
//! audit missing from the document simply produces the rule's default outcome.

use crate::domain::constants::{
    ABSENT, COLOR_CONTRAST, LAYOUT_SHIFT_ELEMENTS, LCP_ELEMENT, MODERN_IMAGE_FORMATS,
    USES_REL_PRELOAD,
};
use crate::domain::models::{AuditStatus, Finding, FindingKind, Measure};
use crate::lighthouse::Report;
use crate::services::extractor::round_to;
use crate::services::navigator::{self, json_path};
use serde_json::Value;

fn node_snippet(item: &Value) -> Option<String> {
    navigator::get_str(item, json_path!["node", "snippet"]).map(str::to_string)
}

/// One finding per offending node while color contrast is not a full pass.
pub fn accessibility_findings(report: &Report) -> Vec<Finding> {
    let score = report.audit_score(COLOR_CONTRAST);
    if AuditStatus::from_score(score).is_pass() {
        return Vec::new();
    }
    report
        .audit_items(COLOR_CONTRAST)
        .iter()
        .map(|item| {
            let snippet = node_snippet(item);
            let mut f = Finding::new(
                FindingKind::Accessibility,
                COLOR_CONTRAST,
                Measure::Score(score),
                format!("Node: {}", snippet.as_deref().unwrap_or(ABSENT)),
            );
            f.snippet = snippet;
            f
        })
        .collect()
}

/// Informational: the element Lighthouse picked as LCP, whatever the score.
pub fn lcp_finding(report: &Report) -> Option<Finding> {
    let first = report.audit_items(LCP_ELEMENT).first()?;
    let snippet = node_snippet(first);
    let mut f = Finding::new(
        FindingKind::Performance,
        LCP_ELEMENT,
        Measure::Informational,
        format!("LCP Element: {}", snippet.as_deref().unwrap_or(ABSENT)),
    );
    f.snippet = snippet;
    Some(f)
}

pub fn preload_finding(report: &Report) -> Option<Finding> {
    let score = report.audit_score(USES_REL_PRELOAD);
    if AuditStatus::from_score(score).is_pass() {
        return None;
    }
    Some(Finding::new(
        FindingKind::Performance,
        USES_REL_PRELOAD,
        Measure::Score(score),
        "Preload key requests".to_string(),
    ))
}

fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn pwa_finding(report: &Report, audit_id: &str) -> Finding {
    let score = report.audit_score(audit_id);
    let audit = report.audit(audit_id);
    let explanation = audit
        .and_then(|a| navigator::get_str(a, json_path!["explanation"]))
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let details = audit
        .and_then(|a| navigator::lookup(a, json_path!["details"]))
        .filter(|d| !is_empty_value(d))
        .map(Value::to_string);
    let shown = score.map(|s| s.to_string());
    let mut f = Finding::new(
        FindingKind::Pwa,
        audit_id,
        Measure::Score(score),
        format!("{}: {}", audit_id, shown.as_deref().unwrap_or(ABSENT)),
    );
    f.explanation = explanation;
    f.details = details;
    f
}

pub fn pwa_findings(report: &Report, audit_ids: &[String]) -> Vec<Finding> {
    audit_ids
        .iter()
        .map(|id| pwa_finding(report, id))
        .collect()
}

pub fn layout_shift_finding(report: &Report) -> Option<Finding> {
    let count = report.audit_items(LAYOUT_SHIFT_ELEMENTS).len();
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        FindingKind::Performance,
        LAYOUT_SHIFT_ELEMENTS,
        Measure::Count(count),
        format!("CLS Contributors: {} elements", count),
    ))
}

/// Savings in KB (two decimals). A missing byte count still yields a 0.00 KB suggestion.
pub fn image_format_finding(report: &Report) -> Option<Finding> {
    if AuditStatus::from_score(report.audit_score(MODERN_IMAGE_FORMATS)).is_pass() {
        return None;
    }
    let bytes = navigator::get_f64_or(
        report.root(),
        json_path!["audits", MODERN_IMAGE_FORMATS, "details", "overallSavingsBytes"],
        0.0,
    );
    let kb = round_to(bytes / 1024.0, 2);
    Some(Finding::new(
        FindingKind::Performance,
        MODERN_IMAGE_FORMATS,
        Measure::Kilobytes(kb),
        format!("Use WebP/AVIF: Save {:.2} KB", kb),
    ))
}

/// Layout shift and image savings, the two opportunities the summary lists.
pub fn opportunities(report: &Report) -> Vec<Finding> {
    layout_shift_finding(report)
        .into_iter()
        .chain(image_format_finding(report))
        .collect()
}

pub fn performance_findings(report: &Report) -> Vec<Finding> {
    lcp_finding(report)
        .into_iter()
        .chain(preload_finding(report))
        .chain(opportunities(report))
        .collect()
}

/// All rules, grouped accessibility, PWA, performance; rule order within a group.
pub fn classify(report: &Report, pwa_audits: &[String]) -> Vec<Finding> {
    let mut findings = accessibility_findings(report);
    findings.extend(performance_findings(report));
    findings.extend(pwa_findings(report, pwa_audits));
    findings.sort_by_key(|f| f.kind);
    tracing::debug!(count = findings.len(), "classified findings");
    findings
}
