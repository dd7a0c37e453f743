//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the typed records derived from a report in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — scores, metrics, findings, html check records.
//! - `constants.rs` — audit ids, metric ids, display limits.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
