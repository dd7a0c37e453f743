use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_REPORT_PATH: &str = "lighthouse-report.json";
pub const DEFAULT_CONFIG_PATH: &str = "lhdiag.toml";

#[derive(Parser, Debug)]
#[command(name = "lhdiag", version, about = "Lighthouse report diagnostics")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Lighthouse JSON report to analyze (default: lighthouse-report.json)"
    )]
    pub report: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ./lhdiag.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scores, PWA pass/fail, performance metrics and opportunities.
    Summary,
    /// Category scores only.
    Scores,
    /// Performance metric display values.
    Metrics,
    /// All classified findings, grouped by kind.
    Findings,
    /// Accessibility failures, LCP element and preload hint.
    Accessibility,
    /// Available categories and PWA audit details.
    Pwa,
    /// Scan an HTML file for duplicate ids and encoding artifacts.
    CheckHtml { path: PathBuf },
}
