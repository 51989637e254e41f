//! Defines the central, mutable state of the browser.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::{filter, FileView, TreeNode};

use super::expansion::ExpansionState;

/// Holds the complete, mutable state of the browser.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` so command handlers and the
/// async load tasks can share it safely. The tree snapshot itself is never
/// mutated; all interactive state lives beside it, keyed by path.
pub struct AppState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The absolute path of the currently loaded root, if any.
    pub current_root: Option<PathBuf>,
    /// The immutable tree snapshot for the current root.
    pub tree: Option<TreeNode>,
    /// Directories currently rendered open.
    pub expansion: ExpansionState,
    /// The live name filter; empty means no filtering.
    pub filter_query: String,
    /// Ancestor paths the current filter needs expanded, as of the last
    /// recompute. Already merged into `expansion`.
    pub auto_expanded: HashSet<String>,
    /// The relative path of the selected file, if any.
    pub selected_file: Option<String>,
    /// The formatted content of the selected file once its read completes.
    pub file_view: Option<FileView>,
    /// Why the tree could not be listed. Blocks showing any tree.
    pub tree_error: Option<String>,
    /// Why the selected file could not be read. Scoped to the selection.
    pub file_error: Option<String>,
    /// `true` while a tree listing is in flight.
    pub is_loading: bool,
    /// Generation stamp for root loads. A listing result is applied only if
    /// it carries the current stamp, so the last requested root always wins.
    pub load_epoch: u64,
    /// Generation stamp for file reads; the newest read wins.
    pub read_epoch: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: AppConfig::load().unwrap_or_default(),
            current_root: None,
            tree: None,
            expansion: ExpansionState::default(),
            filter_query: String::new(),
            auto_expanded: HashSet::new(),
            selected_file: None,
            file_view: None,
            tree_error: None,
            file_error: None,
            is_loading: false,
            load_epoch: 0,
            read_epoch: 0,
        }
    }
}

impl AppState {
    /// Begins a root switch: stamps a new load generation and drops every
    /// piece of state tied to the previous root. The filter text survives a
    /// root change; expansion, selection, content and both error channels do
    /// not. Returns the new load stamp.
    pub fn begin_root_load(&mut self, root: PathBuf) -> u64 {
        self.load_epoch += 1;
        // Reads in flight for the previous root must not land either.
        self.read_epoch += 1;
        self.current_root = Some(root);
        self.tree = None;
        self.expansion.reset();
        self.auto_expanded.clear();
        self.selected_file = None;
        self.file_view = None;
        self.tree_error = None;
        self.file_error = None;
        self.is_loading = true;
        self.load_epoch
    }

    /// Recomputes the filter-driven expansion set and merges it, additively,
    /// into the expansion state. Must run before the view model reads the
    /// expansion set.
    pub fn refresh_auto_expansion(&mut self) {
        let Some(tree) = &self.tree else {
            self.auto_expanded.clear();
            return;
        };
        self.auto_expanded = filter::paths_to_expand(tree, &self.filter_query);
        self.expansion
            .merge_auto_expand(self.auto_expanded.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TreeNode;

    fn state_with_tree() -> AppState {
        let mut state = AppState::default();
        state.tree = Some(TreeNode::dir(
            "ws",
            "",
            vec![TreeNode::dir(
                "src",
                "src",
                vec![TreeNode::file("main.rs", "src/main.rs", Some(1), false)],
            )],
        ));
        state.current_root = Some(PathBuf::from("/ws"));
        state
    }

    #[test]
    fn begin_root_load_resets_per_root_state_and_bumps_epochs() {
        let mut state = state_with_tree();
        state.expansion.toggle("src");
        state.selected_file = Some("src/main.rs".to_string());
        state.tree_error = Some("old".to_string());
        state.filter_query = "main".to_string();
        let (load_before, read_before) = (state.load_epoch, state.read_epoch);

        let token = state.begin_root_load(PathBuf::from("/other"));

        assert_eq!(token, load_before + 1);
        assert_eq!(state.read_epoch, read_before + 1);
        assert!(state.tree.is_none());
        assert!(state.expansion.is_empty());
        assert!(state.selected_file.is_none());
        assert!(state.tree_error.is_none());
        assert!(state.is_loading);
        // The filter text is the one thing that survives.
        assert_eq!(state.filter_query, "main");
    }

    #[test]
    fn refresh_auto_expansion_merges_into_expansion() {
        let mut state = state_with_tree();
        state.filter_query = "main".to_string();
        state.refresh_auto_expansion();

        assert!(state.expansion.is_expanded(""));
        assert!(state.expansion.is_expanded("src"));
        assert!(state.auto_expanded.contains("src"));
    }

    #[test]
    fn refresh_with_empty_query_adds_nothing() {
        let mut state = state_with_tree();
        state.refresh_auto_expansion();
        assert!(state.expansion.is_empty());
        assert!(state.auto_expanded.is_empty());
    }
}
