//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `constants.rs` — compiled-in artifact path, budget and content globs.
//! - `models.rs` — budget, measurement, report and content-scan structs.
//! - `errors.rs` — `GuardError` and its stable JSON error codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
