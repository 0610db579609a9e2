//! Command handler layer.
//!
//! ## Files
//! - `edit.rs` — remove/preview handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod edit;

pub use edit::handle_commands;
