//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `editor.rs` — read/cut/write flow behind `remove` and `preview`.
//! - `config.rs` — config file loading and flag/env/file/default resolution.
//! - `digest.rs` — SHA-256 fingerprints for reports.
//! - `storage.rs` — audit log persistence.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod digest;
pub mod editor;
pub mod logging;
pub mod output;
pub mod storage;
