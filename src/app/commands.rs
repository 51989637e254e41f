//! The operations a presentation layer invokes on user interaction.
//!
//! Each function corresponds to one gesture: picking a folder, typing in the
//! filter box, clicking a row. Handlers mutate the shared `AppState`, keep the
//! filter-driven expansion merged, and notify the UI through the proxy.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::helpers::with_state_and_notify;
use super::proxy::EventProxy;
use super::state::AppState;
use super::tasks::{start_load_root, start_read_file};
use super::view_model::generate_ui_state;
use super::workspace::{DialogService, WorkspaceProvider};
use crate::core::TreeNode;

/// Opens a folder picker and loads the chosen directory as the new root.
///
/// Cancelling the dialog leaves the current state untouched.
pub fn select_directory<P, W, D>(
    dialog: &D,
    provider: Arc<W>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) where
    P: EventProxy,
    W: WorkspaceProvider,
    D: DialogService + ?Sized,
{
    match dialog.pick_directory() {
        Some(path) => start_load_root(path, provider, proxy, state),
        None => tracing::info!("user cancelled directory selection"),
    }
}

/// Loads `root` as the new workspace.
///
/// Also the retry path after a tree error: calling it again simply issues a
/// fresh listing.
pub fn load_root<P, W>(root: PathBuf, provider: Arc<W>, proxy: P, state: Arc<Mutex<AppState>>)
where
    P: EventProxy,
    W: WorkspaceProvider,
{
    start_load_root(root, provider, proxy, state);
}

/// Reopens the root remembered from the previous session, if there is one and
/// the configuration allows it. A missing or unreadable remembered root is
/// simply "nothing to reopen", never an error.
pub fn open_last_root<P, W>(provider: Arc<W>, proxy: P, state: Arc<Mutex<AppState>>)
where
    P: EventProxy,
    W: WorkspaceProvider,
{
    let remembered = {
        let state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        if state_guard.config.auto_load_last_root {
            state_guard.config.last_root.clone()
        } else {
            None
        }
    };

    match remembered {
        Some(root) => start_load_root(root, provider, proxy, state),
        None => initialize(proxy, state),
    }
}

/// Handles the initial request for state from the presentation layer.
pub fn initialize<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    let state_guard = state
        .lock()
        .expect("Mutex was poisoned. This should not happen.");
    let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
    proxy.send_event(event);
}

/// Applies a new filter string.
///
/// Auto-expansion is recomputed and merged before the visible rows are
/// rebuilt, so every match is reachable in the very update that reflects the
/// new query.
pub fn set_filter<P: EventProxy>(query: String, proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, |s| {
        s.filter_query = query;
        s.refresh_auto_expansion();
    });
}

/// Expands or collapses a directory row.
///
/// A collapse wins even when the current filter auto-expanded the path; the
/// filter only re-merges when the query or the tree changes.
pub fn toggle_directory<P: EventProxy>(path: String, proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, |s| {
        s.expansion.toggle(&path);
    });
}

/// Activates a row: directories toggle their expansion, files start a read.
/// Selection only ever moves for files.
pub fn select_path<P, W>(path: String, provider: Arc<W>, proxy: P, state: Arc<Mutex<AppState>>)
where
    P: EventProxy,
    W: WorkspaceProvider,
{
    let is_directory = {
        let state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        state_guard
            .tree
            .as_ref()
            .and_then(|tree| find_node(tree, &path))
            .map(|node| node.is_dir())
    };

    match is_directory {
        Some(true) => toggle_directory(path, proxy, state),
        Some(false) => start_read_file(path, provider, proxy, state),
        None => tracing::warn!("activation of unknown path ignored: {}", path),
    }
}

fn find_node<'a>(tree: &'a TreeNode, path: &str) -> Option<&'a TreeNode> {
    if tree.path == path {
        return Some(tree);
    }
    tree.children()
        .iter()
        .find_map(|child| find_node(child, path))
}
