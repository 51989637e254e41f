//! Defines the events delivered from the core to the presentation layer.

use crate::core::FileView;

use super::view_model::UiState;

/// Events sent to the consumer through its [`super::proxy::EventProxy`].
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// A complete state update to re-render the tree view.
    StateUpdate(Box<UiState>),
    /// Formatted content for the file panel, after a successful read.
    ShowFilePreview { path: String, view: FileView },
}
