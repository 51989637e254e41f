//! Transforms the `AppState` into a `UiState` view model.
//!
//! The visible tree is a flat, ordered row list: a depth-first pre-order walk
//! that descends into a directory only when its path is in the merged
//! expansion set, narrowing each level with the live filter first.

use serde::Serialize;

use crate::core::{filter, TreeNode};

use super::expansion::ExpansionState;
use super::state::AppState;

/// A serializable snapshot of everything the presentation layer renders.
#[derive(Serialize, Clone, Debug)]
pub struct UiState {
    pub root: Option<String>,
    pub rows: Vec<Row>,
    pub filter_query: String,
    pub selected_file: Option<String>,
    pub is_loading: bool,
    pub tree_error: Option<String>,
    pub file_error: Option<String>,
}

/// One visible row of the tree, in render order.
#[derive(Serialize, Clone, Debug)]
pub struct Row {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    pub is_too_large: bool,
    /// Nesting depth; direct children of the root are depth 1.
    pub depth: usize,
    pub is_expanded: bool,
    pub is_selected: bool,
    /// `true` when the node's own name matched a non-empty filter.
    pub is_match: bool,
}

/// Creates the complete `UiState` from the current `AppState`.
pub fn generate_ui_state(state: &AppState) -> UiState {
    let rows = match &state.tree {
        Some(tree) => visible_rows(
            tree,
            &state.filter_query,
            &state.expansion,
            state.selected_file.as_deref(),
        ),
        None => Vec::new(),
    };

    UiState {
        root: state
            .current_root
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        rows,
        filter_query: state.filter_query.clone(),
        selected_file: state.selected_file.clone(),
        is_loading: state.is_loading,
        tree_error: state.tree_error.clone(),
        file_error: state.file_error.clone(),
    }
}

/// The ordered list of visible rows for `tree` under the given filter and
/// expansion set. The root itself is not a row; its children start at depth 1.
pub fn visible_rows(
    tree: &TreeNode,
    query: &str,
    expansion: &ExpansionState,
    selected: Option<&str>,
) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(tree, query, expansion, selected, 1, &mut rows);
    rows
}

fn push_rows(
    dir: &TreeNode,
    query: &str,
    expansion: &ExpansionState,
    selected: Option<&str>,
    depth: usize,
    rows: &mut Vec<Row>,
) {
    for child in filter::visible_children(dir, query) {
        let is_directory = child.is_dir();
        let is_expanded = is_directory && expansion.is_expanded(&child.path);
        rows.push(Row {
            name: child.name.clone(),
            path: child.path.clone(),
            is_directory,
            size_bytes: child.size_bytes,
            is_too_large: child.is_too_large,
            depth,
            is_expanded,
            is_selected: selected == Some(child.path.as_str()),
            is_match: !query.is_empty() && filter::name_matches(child, query),
        });
        if is_expanded {
            push_rows(child, query, expansion, selected, depth + 1, rows);
        }
    }
}
