//! Tracks which directories are rendered open.
//!
//! Membership is a pure set keyed by relative path: no ordering, no duplicate
//! semantics, and no tie to the current tree -- a path that no longer exists
//! is harmless and simply never renders.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Flips the expansion of `path`. Toggling twice restores the prior
    /// membership exactly.
    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Adds filter-driven expansions. A union, never a removal: auto-expansion
    /// must not collapse anything the user opened, and an explicit toggle can
    /// still close a path the filter wanted open.
    pub fn merge_auto_expand<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.expanded.extend(paths);
    }

    /// Clears the set. Invoked whenever a new root is loaded.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
