//! Async tasks for the two I/O boundaries.
//!
//! Neither boundary supports true cancellation. Instead every request is
//! stamped with the state's current generation at spawn time, and its result
//! is discarded on arrival if a newer request has superseded it. Discards are
//! silent: supersession is not an error.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::settings;
use crate::core::formatter;

use super::events::UserEvent;
use super::proxy::EventProxy;
use super::state::AppState;
use super::view_model::generate_ui_state;
use super::workspace::WorkspaceProvider;

/// Starts loading a new root.
///
/// Resets all per-root state up front, remembers the root (best effort), and
/// applies the listing only if no newer load has been issued meanwhile: the
/// last requested root always wins.
pub fn start_load_root<P, W>(root: PathBuf, provider: Arc<W>, proxy: P, state: Arc<Mutex<AppState>>)
where
    P: EventProxy,
    W: WorkspaceProvider,
{
    let token = {
        let mut state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        let token = state_guard.begin_root_load(root.clone());
        settings::remember_last_root(&mut state_guard.config, &root);
        let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
        proxy.send_event(event);
        token
    };

    tokio::spawn(async move {
        let result = provider.list_tree(&root).await;

        let mut state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        if state_guard.load_epoch != token {
            tracing::debug!("discarding superseded listing for {}", root.display());
            return;
        }

        match result {
            Ok(tree) => {
                tracing::info!("loaded workspace tree for {}", root.display());
                state_guard.tree = Some(tree);
                state_guard.tree_error = None;
                // Auto-expansion must be merged before the rows are rebuilt.
                state_guard.refresh_auto_expansion();
            }
            Err(e) => {
                tracing::warn!("failed to list {}: {}", root.display(), e);
                state_guard.tree = None;
                state_guard.tree_error = Some(e.to_string());
            }
        }
        state_guard.is_loading = false;

        let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
        proxy.send_event(event);
    });
}

/// Starts reading the selected file.
///
/// Only the newest read may publish its outcome, and a root switch bumps the
/// read generation too, so a stale read can never cross roots.
pub fn start_read_file<P, W>(
    rel_path: String,
    provider: Arc<W>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) where
    P: EventProxy,
    W: WorkspaceProvider,
{
    let (root, max_bytes, token) = {
        let mut state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        let Some(root) = state_guard.current_root.clone() else {
            tracing::warn!("file selected with no root loaded: {}", rel_path);
            return;
        };

        state_guard.read_epoch += 1;
        state_guard.selected_file = Some(rel_path.clone());
        state_guard.file_view = None;
        state_guard.file_error = None;

        let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
        proxy.send_event(event);

        (root, state_guard.config.max_read_bytes, state_guard.read_epoch)
    };

    tokio::spawn(async move {
        let result = provider.read_file(&root, &rel_path, max_bytes).await;

        let mut state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        if state_guard.read_epoch != token {
            tracing::debug!("discarding superseded read for {}", rel_path);
            return;
        }

        match result {
            Ok(raw) => {
                let view = formatter::format(&rel_path, &raw);
                state_guard.file_view = Some(view.clone());
                proxy.send_event(UserEvent::ShowFilePreview {
                    path: rel_path,
                    view,
                });
            }
            Err(e) => {
                tracing::warn!("failed to read {}: {}", rel_path, e);
                state_guard.file_error = Some(e.to_string());
            }
        }

        let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
        proxy.send_event(event);
    });
}
