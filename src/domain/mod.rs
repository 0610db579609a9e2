//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — config, report and output envelope structs.
//! - `constants.rs` — built-in defaults (target file, line range, paths).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output. Keep them in sync with
//! the schemas in `docs/contracts/*`.

pub mod constants;
pub mod models;
