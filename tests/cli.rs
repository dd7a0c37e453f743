mod common;

use common::TestEnv;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn summary_text() {
    let env = TestEnv::new();
    let out = env.stdout(&["summary"]);
    let expected = "\
--- LIGHTHOUSE SCORES ---
Performance: 87.0
Accessibility: 91.0
Best Practices: 0.0
PWA: 50.0

--- PWA CHECKS ---
Installable Manifest: FAIL
Service Worker: PASS

--- PERFORMANCE METRICS ---
First Contentful Paint: 1.2 s (Score: 0.98)
Largest Contentful Paint: 2.9 s (Score: 0.71)
Total Blocking Time: 40 ms (Score: 1)
n/a: n/a (Score: n/a)

--- OPPORTUNITIES ---
CLS Contributors: 2 elements
Use WebP/AVIF: Save 51.20 KB
";
    assert_eq!(out, expected);
}

#[test]
fn scores_only() {
    let env = TestEnv::new();
    env.cmd()
        .arg("scores")
        .assert()
        .success()
        .stdout(contains("Performance: 87.0"))
        .stdout(contains("PWA CHECKS").not());
}

#[test]
fn accessibility_lists_failing_nodes_and_lcp() {
    let env = TestEnv::new();
    let out = env.stdout(&["accessibility"]);
    assert!(out.contains("Color Contrast Score: 0\n"));
    assert!(out.contains("- Node: <a class=\"nav-link\" href=\"/pricing\">"));
    assert!(out.contains("- Node: <span class=\"badge\">"));
    assert!(out.contains("LCP Element: <img class=\"hero\" src=\"/hero.png\">"));
    assert!(out.contains("Suggestion: Preload key requests"));
}

#[test]
fn pwa_details_are_truncated_for_display() {
    let env = TestEnv::new();
    let out = env.stdout(&["pwa"]);
    assert!(out.starts_with("Available Categories: performance, accessibility, best-practices, pwa\n"));
    assert!(out.contains("PWA Category Found!"));
    assert!(out.contains("installable-manifest: 0\nExplanation: Page has no manifest <link> URL\n"));
    let details = out
        .lines()
        .find(|l| l.starts_with("Details: "))
        .expect("details line");
    let summary = details.trim_start_matches("Details: ");
    assert!(summary.ends_with("..."));
    assert_eq!(summary.chars().count(), 203);
    assert!(out.contains("splash-screen: n/a"));
}

#[test]
fn findings_are_grouped() {
    let env = TestEnv::new();
    let out = env.stdout(&["findings"]);
    let a11y = out.find("--- ACCESSIBILITY FAILURES ---").expect("a11y section");
    let pwa = out.find("--- PWA AUDIT DETAILS ---").expect("pwa section");
    let perf = out.find("--- OPPORTUNITIES ---").expect("perf section");
    assert!(a11y < pwa && pwa < perf);
    assert!(out.contains("- CLS Contributors: 2 elements"));
    assert!(out.contains("- Use WebP/AVIF: Save 51.20 KB"));
}
