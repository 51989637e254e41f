//! Defines the custom error type for the `core` module.

use thiserror::Error;

/// The primary error type for the `core` module.
///
/// The two I/O boundaries fail independently and are never conflated: a tree
/// listing failure blocks showing any tree, while a file read failure is
/// scoped to the current selection.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The workspace tree could not be listed at all.
    #[error("workspace tree unavailable: {0}")]
    TreeUnavailable(String),

    /// The selected file cannot be displayed as text.
    #[error("cannot read file: {0}")]
    FileUnreadable(String),

    /// A blocking task panicked or was cancelled before finishing.
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
