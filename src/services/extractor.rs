use crate::domain::constants::PWA_BOOLEAN_AUDITS;
use crate::domain::models::{AuditStatus, CategoryScore, MetricDisplay, PwaCheck};
use crate::lighthouse::Report;
use crate::services::navigator::{self, json_path};
use serde_json::Value;

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// One entry per category in document order. A missing score counts as 0.
pub fn category_scores(report: &Report) -> Vec<CategoryScore> {
    let Some(categories) = navigator::get_object(report.root(), json_path!["categories"]) else {
        return Vec::new();
    };
    categories
        .iter()
        .map(|(id, category)| {
            let score = navigator::get_f64_or(category, json_path!["score"], 0.0);
            CategoryScore {
                id: id.clone(),
                title: navigator::get_str(category, json_path!["title"])
                    .unwrap_or(id)
                    .to_string(),
                percentage: round_to(score * 100.0, 1),
            }
        })
        .collect()
}

pub fn category_ids(report: &Report) -> Vec<String> {
    navigator::get_object(report.root(), json_path!["categories"])
        .map(|categories| categories.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn category<'r>(report: &'r Report, id: &str) -> Option<&'r Value> {
    navigator::lookup(report.root(), json_path!["categories", id])
}

pub fn boolean_audit(report: &Report, audit_id: &str) -> AuditStatus {
    AuditStatus::from_score(report.audit_score(audit_id))
}

pub fn pwa_checks(report: &Report) -> Vec<PwaCheck> {
    PWA_BOOLEAN_AUDITS
        .iter()
        .map(|(id, label)| PwaCheck {
            id: id.to_string(),
            label: label.to_string(),
            status: boolean_audit(report, id),
        })
        .collect()
}

pub fn metric_display(report: &Report, metric_id: &str) -> MetricDisplay {
    let text = |field: &str| {
        navigator::get_str(report.root(), json_path!["audits", metric_id, field])
            .map(str::to_string)
    };
    MetricDisplay {
        id: metric_id.to_string(),
        title: text("title"),
        display_value: text("displayValue"),
        score: report.audit_score(metric_id),
    }
}

pub fn metric_displays(report: &Report, metric_ids: &[String]) -> Vec<MetricDisplay> {
    metric_ids
        .iter()
        .map(|id| metric_display(report, id))
        .collect()
}
