//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — size guard run (the default command).
//! - `content.rs` — content-scan show/files/export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod content;

pub use check::handle_check;
pub use content::handle_content_commands;
