//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `size_guard.rs` — measure the artifact, apply the two-level budget.
//! - `report.rs` — operator-facing text report.
//! - `content_scan.rs` — content glob expansion and generator module export.
//! - `config.rs` — optional TOML overrides layered over the defaults.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod content_scan;
pub mod output;
pub mod report;
pub mod size_guard;
