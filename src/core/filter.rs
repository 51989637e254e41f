//! The incremental name filter.
//!
//! Matching is purely by node name: a case-insensitive substring test,
//! propagated upward so a directory survives the filter whenever any of its
//! descendants does. Filtering is evaluated lazily at each directory level;
//! the tree snapshot is never cloned or pruned.

use std::collections::HashSet;

use super::TreeNode;

/// Returns `true` if `node` survives the filter `query`.
///
/// The empty query matches everything. A directory also matches when any
/// descendant does, so ancestors of a match stay visible.
pub fn matches(node: &TreeNode, query: &str) -> bool {
    if query.is_empty() || name_matches(node, query) {
        return true;
    }
    node.children().iter().any(|child| matches(child, query))
}

/// The raw name test: a case-insensitive substring match against the node's
/// own name, with no descendant propagation.
pub fn name_matches(node: &TreeNode, query: &str) -> bool {
    node.name.to_lowercase().contains(&query.to_lowercase())
}

/// The children of `node` that should render under the current filter, in
/// their original relative order.
///
/// An empty query returns every child unchanged, including non-matching ones:
/// a directory whose own name matched renders its full contents once opened.
pub fn visible_children<'a>(node: &'a TreeNode, query: &str) -> Vec<&'a TreeNode> {
    if query.is_empty() {
        node.children().iter().collect()
    } else {
        node.children()
            .iter()
            .filter(|child| matches(child, query))
            .collect()
    }
}

/// The minimal set of directory paths that must be expanded so every node
/// matching `query` is reachable.
///
/// A directory is included iff at least one of its children matches, directly
/// or through a descendant; the root path is therefore present whenever any
/// match exists at all. A directory whose own name matches but which holds no
/// matching descendant is not included -- it needs no forced expansion.
pub fn paths_to_expand(root: &TreeNode, query: &str) -> HashSet<String> {
    let mut paths = HashSet::new();
    if !query.is_empty() {
        collect_expansions(root, query, &mut paths);
    }
    paths
}

fn collect_expansions(dir: &TreeNode, query: &str, paths: &mut HashSet<String>) {
    let mut has_matching_child = false;
    for child in dir.children() {
        if matches(child, query) {
            has_matching_child = true;
            if child.is_dir() {
                collect_expansions(child, query, paths);
            }
        }
    }
    if has_matching_child {
        paths.insert(dir.path.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root/
    ///   src/
    ///     a.ts
    ///     deep/
    ///       main.rs
    ///   readme.md
    fn sample_tree() -> TreeNode {
        TreeNode::dir(
            "workspace",
            "",
            vec![
                TreeNode::dir(
                    "src",
                    "src",
                    vec![
                        TreeNode::file("a.ts", "src/a.ts", Some(10), false),
                        TreeNode::dir(
                            "deep",
                            "src/deep",
                            vec![TreeNode::file("main.rs", "src/deep/main.rs", Some(20), false)],
                        ),
                    ],
                ),
                TreeNode::file("readme.md", "readme.md", Some(5), false),
            ],
        )
    }

    #[test]
    fn empty_query_matches_everything() {
        let tree = sample_tree();
        assert!(matches(&tree, ""));
        assert!(matches(&tree.children()[1], ""));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let tree = sample_tree();
        let readme = &tree.children()[1];
        assert!(matches(readme, "README"));
        assert!(matches(readme, "adme.M"));
        assert!(!matches(readme, "xyz"));
    }

    #[test]
    fn directory_matches_through_descendants() {
        let tree = sample_tree();
        let src = &tree.children()[0];
        // "main" only exists two levels down.
        assert!(matches(src, "main"));
        assert!(!matches(src, "nothing-here"));
    }

    #[test]
    fn name_matches_never_looks_at_descendants() {
        let tree = sample_tree();
        let src = &tree.children()[0];
        assert!(name_matches(src, "SRC"));
        assert!(!name_matches(src, "main"));
    }

    #[test]
    fn visible_children_unfiltered_on_empty_query() {
        let tree = sample_tree();
        let children = visible_children(&tree, "");
        let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["src", "readme.md"]);
    }

    #[test]
    fn visible_children_preserves_relative_order() {
        let tree = sample_tree();
        // "src" survives through "deep", "readme.md" by its own name.
        let children = visible_children(&tree, "e");
        let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["src", "readme.md"]);
    }

    #[test]
    fn filter_excludes_non_matching_siblings() {
        let tree = sample_tree();
        let children = visible_children(&tree, "a.ts");
        let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["src"]);
    }

    #[test]
    fn paths_to_expand_is_empty_for_empty_query() {
        assert!(paths_to_expand(&sample_tree(), "").is_empty());
    }

    #[test]
    fn paths_to_expand_covers_every_match_minimally() {
        let tree = sample_tree();

        let paths = paths_to_expand(&tree, "main");
        let expected: HashSet<String> =
            ["", "src", "src/deep"].iter().map(|s| s.to_string()).collect();
        assert_eq!(paths, expected);

        // a.ts sits directly under src; deep has no match and must not appear.
        let paths = paths_to_expand(&tree, "a.ts");
        let expected: HashSet<String> = ["", "src"].iter().map(|s| s.to_string()).collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn directory_matching_by_own_name_is_not_force_expanded() {
        // "deep" matches by name but contains no node whose name matches.
        let tree = sample_tree();
        let paths = paths_to_expand(&tree, "deep");
        // Ancestors of the matching directory are expanded; the directory
        // itself is not.
        let expected: HashSet<String> = ["", "src"].iter().map(|s| s.to_string()).collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn no_match_anywhere_yields_no_expansions() {
        assert!(paths_to_expand(&sample_tree(), "zzz").is_empty());
    }
}
