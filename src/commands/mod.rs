//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `report.rs` — summary/scores/metrics/findings/accessibility/pwa.
//! - `html.rs` — check-html.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate analysis to `services/*`.
//! - Keep text output and the `--json` schema stable.

pub mod html;
pub mod report;

pub use html::handle_check_html;
pub use report::handle_report_commands;
