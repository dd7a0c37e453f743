//! Service layer containing analysis logic and side-effect helpers.
//!
//! ## Service map
//! - `navigator.rs` — default-valued lookup into the report JSON.
//! - `extractor.rs` — category scores, boolean audits, metric display values.
//! - `classifier.rs` — accessibility/PWA/performance finding rules.
//! - `html_check.rs` — duplicate id and mis-decoded text scan.
//! - `config.rs` — `lhdiag.toml` loading and effective settings.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Report access goes through `navigator`; rules never index JSON directly.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod classifier;
pub mod config;
pub mod extractor;
pub mod html_check;
pub mod logging;
pub mod navigator;
pub mod output;
