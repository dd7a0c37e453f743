use crate::cli::{Cli, Commands};
use crate::domain::constants::{COLOR_CONTRAST, PWA_CATEGORY};
use crate::domain::models::{
    AccessibilityReport, AuditStatus, CategoryScore, Finding, FindingKind, MetricDisplay, PwaCheck,
    PwaReport, SummaryReport,
};
use crate::lighthouse::Report;
use crate::services::classifier::{
    accessibility_findings, classify, lcp_finding, opportunities, preload_finding, pwa_findings,
};
use crate::services::config::Settings;
use crate::services::extractor::{
    category, category_ids, category_scores, metric_displays, pwa_checks,
};
use crate::services::output::{finding_lines, format_score, metric_line, print_one, section};

use super::html::handle_check_html;

pub fn handle_report_commands(
    cli: &Cli,
    settings: &Settings,
    report: &Report,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Summary => {
            let summary = SummaryReport {
                scores: category_scores(report),
                pwa: pwa_checks(report),
                metrics: metric_displays(report, &settings.metrics),
                opportunities: opportunities(report),
            };
            print_one(cli.json, summary, summary_lines)?;
        }
        Commands::Scores => {
            print_one(cli.json, category_scores(report), |s| score_lines(s))?;
        }
        Commands::Metrics => {
            print_one(
                cli.json,
                metric_displays(report, &settings.metrics),
                |m| metric_lines(m),
            )?;
        }
        Commands::Findings => {
            let findings = classify(report, &settings.pwa_audits);
            print_one(cli.json, findings, |f| {
                grouped_finding_lines(f, settings.details_limit)
            })?;
        }
        Commands::Accessibility => {
            let score = report.audit_score(COLOR_CONTRAST);
            let a11y = AccessibilityReport {
                color_contrast: AuditStatus::from_score(score),
                color_contrast_score: score,
                failures: accessibility_findings(report),
                lcp_element: lcp_finding(report),
                preload: preload_finding(report),
            };
            print_one(cli.json, a11y, accessibility_lines)?;
        }
        Commands::Pwa => {
            let pwa = PwaReport {
                categories: category_ids(report),
                pwa_category: category(report, PWA_CATEGORY).cloned(),
                audits: pwa_findings(report, &settings.pwa_audits),
            };
            print_one(cli.json, pwa, |p| pwa_lines(p, settings.details_limit))?;
        }
        Commands::CheckHtml { path } => handle_check_html(cli.json, path)?,
    }
    Ok(())
}

fn score_lines(scores: &[CategoryScore]) -> Vec<String> {
    let mut lines = vec![section("LIGHTHOUSE SCORES")];
    lines.extend(
        scores
            .iter()
            .map(|s| format!("{}: {:.1}", s.title, s.percentage)),
    );
    lines
}

fn pwa_check_lines(checks: &[PwaCheck]) -> Vec<String> {
    let mut lines = vec![section("PWA CHECKS")];
    lines.extend(checks.iter().map(|c| format!("{}: {}", c.label, c.status)));
    lines
}

fn metric_lines(metrics: &[MetricDisplay]) -> Vec<String> {
    let mut lines = vec![section("PERFORMANCE METRICS")];
    lines.extend(metrics.iter().map(metric_line));
    lines
}

fn opportunity_lines(findings: &[Finding]) -> Vec<String> {
    let mut lines = vec![section("OPPORTUNITIES")];
    lines.extend(findings.iter().map(|f| f.message.clone()));
    lines
}

fn summary_lines(s: &SummaryReport) -> Vec<String> {
    let mut lines = score_lines(&s.scores);
    for block in [
        pwa_check_lines(&s.pwa),
        metric_lines(&s.metrics),
        opportunity_lines(&s.opportunities),
    ] {
        lines.push(String::new());
        lines.extend(block);
    }
    lines
}

fn grouped_finding_lines(findings: &[Finding], details_limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for kind in [
        FindingKind::Accessibility,
        FindingKind::Pwa,
        FindingKind::Performance,
    ] {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(section(kind.heading()));
        let mut any = false;
        for f in findings.iter().filter(|f| f.kind == kind) {
            any = true;
            for (i, line) in finding_lines(f, details_limit).into_iter().enumerate() {
                let marker = if i == 0 { "- " } else { "  " };
                lines.push(format!("{}{}", marker, line));
            }
        }
        if !any {
            lines.push("none".to_string());
        }
    }
    lines
}

fn accessibility_lines(a: &AccessibilityReport) -> Vec<String> {
    let mut lines = vec![section("ACCESSIBILITY FAILURES")];
    if !a.color_contrast.is_pass() {
        lines.push(format!(
            "Color Contrast Score: {}",
            format_score(a.color_contrast_score)
        ));
        lines.extend(a.failures.iter().map(|f| format!("- {}", f.message)));
    }
    lines.push(String::new());
    lines.push(section("LCP ANALYSIS"));
    lines.push(
        a.lcp_element
            .as_ref()
            .map(|f| f.message.clone())
            .unwrap_or_else(|| "LCP Element: n/a".to_string()),
    );
    if let Some(preload) = &a.preload {
        lines.push(format!("Suggestion: {}", preload.message));
    }
    lines
}

fn pwa_lines(p: &PwaReport, details_limit: usize) -> Vec<String> {
    let mut lines = vec![format!("Available Categories: {}", p.categories.join(", "))];
    lines.push(String::new());
    match &p.pwa_category {
        Some(category) => {
            lines.push("PWA Category Found!".to_string());
            lines.extend(format!("{:#}", category).lines().map(str::to_string));
        }
        None => lines.push("PWA Category NOT found in 'categories' object.".to_string()),
    }
    lines.push(String::new());
    lines.push(section("PWA AUDIT DETAILS"));
    for f in &p.audits {
        lines.push(String::new());
        lines.extend(finding_lines(f, details_limit));
    }
    lines
}
