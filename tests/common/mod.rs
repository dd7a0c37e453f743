#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub report: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_report(&fixture_report())
    }

    pub fn with_report(report: &Value) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        let report_path = dir.join("lighthouse-report.json");
        fs::write(
            &report_path,
            serde_json::to_string_pretty(report).expect("serialize report"),
        )
        .expect("write report");
        Self {
            _tmp: tmp,
            dir,
            report: report_path,
        }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Runs inside the temp dir so the default report path and `lhdiag.toml` resolve there.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("lhdiag");
        cmd.current_dir(&self.dir).env_remove("LHDIAG_LOG");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn fixture_report() -> Value {
    serde_json::json!({
        "lighthouseVersion": "11.4.0",
        "categories": {
            "performance": {"id": "performance", "title": "Performance", "score": 0.87},
            "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 0.91},
            "best-practices": {"id": "best-practices", "title": "Best Practices", "score": null},
            "pwa": {"id": "pwa", "title": "PWA", "score": 0.5, "auditRefs": [{"id": "viewport", "weight": 1}]}
        },
        "audits": {
            "first-contentful-paint": {"title": "First Contentful Paint", "displayValue": "1.2 s", "score": 0.98},
            "largest-contentful-paint": {"title": "Largest Contentful Paint", "displayValue": "2.9 s", "score": 0.71},
            "total-blocking-time": {"title": "Total Blocking Time", "displayValue": "40 ms", "score": 1},
            "color-contrast": {
                "title": "Background and foreground colors do not have a sufficient contrast ratio.",
                "score": 0,
                "details": {"type": "table", "items": [
                    {"node": {"snippet": "<a class=\"nav-link\" href=\"/pricing\">"}},
                    {"node": {"snippet": "<span class=\"badge\">"}}
                ]}
            },
            "largest-contentful-paint-element": {
                "score": null,
                "details": {"type": "list", "items": [
                    {"node": {"snippet": "<img class=\"hero\" src=\"/hero.png\">"}}
                ]}
            },
            "uses-rel-preload": {"score": 0.5},
            "installable-manifest": {
                "score": 0,
                "explanation": "Page has no manifest <link> URL",
                "details": {"type": "table", "items": [{"reason": "Page has no manifest <link> URL"}], "debugData": {"manifestUrl": null, "padding": "x".repeat(300)}}
            },
            "service-worker": {"score": 1},
            "viewport": {"score": 1, "details": {}},
            "layout-shift-elements": {"details": {"items": [{"score": 0.1}, {"score": 0.02}]}},
            "modern-image-formats": {"score": 0.3, "details": {"overallSavingsBytes": 52428}}
        }
    })
}
