//! Core library of a workspace file browser.
//!
//! Given a root directory this crate maintains an immutable tree snapshot,
//! filters it incrementally by name (auto-expanding the ancestors of every
//! match), tracks which directories are open, and formats a selected file
//! into numbered lines with a best-effort language tag.
//!
//! There is no UI in here. A presentation layer drives the crate through the
//! functions in [`app::commands`] and receives [`app::events::UserEvent`]s
//! through its own [`app::proxy::EventProxy`] implementation.

pub mod app;
pub mod config;
pub mod core;
pub mod utils;
