//! Produces the immutable workspace tree snapshot.
//!
//! The walk is bounded in depth and total node count and skips the usual
//! VCS/build noise, so a snapshot stays affordable even on large workspaces.
//! Each directory's children are sorted directories-first, then by
//! case-insensitive name; nothing downstream re-sorts them.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::CoreError;
use super::{NodeKind, TreeNode};

const MAX_DEPTH: usize = 10;
const MAX_NODES: usize = 50_000;
const LARGE_FILE_THRESHOLD: u64 = 2 * 1024 * 1024;

const ALWAYS_IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    ".next",
    ".turbo",
    ".cache",
];
const ALLOWED_HIDDEN_DIRS: &[&str] = &[".github", ".vscode"];
const ALWAYS_IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Lists the workspace rooted at `root` into a [`TreeNode`] snapshot.
///
/// The returned root node carries the empty relative path and is never
/// rendered itself; its descendants carry `/`-separated paths relative to
/// `root`. Fails with [`CoreError::TreeUnavailable`] when `root` is missing,
/// not a directory, or cannot be resolved.
pub fn list_tree(root: &Path) -> Result<TreeNode, CoreError> {
    if !root.exists() {
        return Err(CoreError::TreeUnavailable(format!(
            "root path does not exist: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(CoreError::TreeUnavailable(format!(
            "root path is not a directory: {}",
            root.display()
        )));
    }
    let canonical_root = root.canonicalize().map_err(|e| {
        CoreError::TreeUnavailable(format!("failed to resolve root {}: {}", root.display(), e))
    })?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(&canonical_root)
        .max_depth(MAX_DEPTH)
        .follow_links(false)
        .into_iter()
        // depth 0 is the root itself; it is exempt from the skip rules so a
        // hidden or dot-named workspace can still be opened.
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, &canonical_root))
    {
        if entries.len() >= MAX_NODES {
            tracing::warn!(
                "workspace listing truncated at {} nodes: {}",
                MAX_NODES,
                canonical_root.display()
            );
            break;
        }
        let Ok(entry) = entry else { continue };
        if entry.path() == canonical_root {
            continue;
        }
        entries.push(entry);
    }

    // Shallowest first, so every parent's bucket exists before its children
    // are slotted in.
    entries.sort_by_key(|entry| entry.depth());

    let mut buckets: HashMap<PathBuf, Vec<TreeNode>> = HashMap::new();
    buckets.insert(canonical_root.clone(), Vec::new());

    for entry in &entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let rel_path = relative_posix_path(entry.path(), &canonical_root);

        let node = if entry.file_type().is_dir() {
            buckets.insert(entry.path().to_path_buf(), Vec::new());
            TreeNode::dir(name, rel_path, Vec::new())
        } else {
            let size = fs::metadata(entry.path()).ok().map(|m| m.len());
            let too_large = size.is_some_and(|s| s > LARGE_FILE_THRESHOLD);
            TreeNode::file(name, rel_path, size, too_large)
        };

        let parent = entry.path().parent().unwrap_or(&canonical_root);
        if let Some(siblings) = buckets.get_mut(parent) {
            siblings.push(node);
        }
    }

    let root_name = canonical_root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| canonical_root.to_string_lossy().to_string());

    let tree = assemble(
        TreeNode::dir(root_name, String::new(), Vec::new()),
        &canonical_root,
        &mut buckets,
    );
    tracing::debug!(
        "listed {} entries under {}",
        entries.len(),
        canonical_root.display()
    );
    Ok(tree)
}

/// Moves each directory's bucket into place, sorted directories-first then by
/// case-insensitive name.
fn assemble(
    mut node: TreeNode,
    full_path: &Path,
    buckets: &mut HashMap<PathBuf, Vec<TreeNode>>,
) -> TreeNode {
    let mut children = buckets.remove(full_path).unwrap_or_default();
    children.sort_by(|a, b| match (a.kind, b.kind) {
        (NodeKind::Dir, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Dir) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    let children = children
        .into_iter()
        .map(|child| {
            if child.is_dir() {
                let child_path = full_path.join(&child.name);
                assemble(child, &child_path, buckets)
            } else {
                child
            }
        })
        .collect();
    node.children = Some(children);
    node
}

fn should_skip(entry: &walkdir::DirEntry, root: &Path) -> bool {
    let name = entry.file_name().to_string_lossy();

    if entry.path_is_symlink() {
        // Symlinked directories are never descended into; symlinked files are
        // kept only when their target is a file inside the workspace.
        return !symlink_stays_inside(entry.path(), root);
    }

    if entry.file_type().is_dir() {
        if ALWAYS_IGNORED_DIRS.contains(&name.as_ref()) {
            return true;
        }
        if name.starts_with('.') {
            return !ALLOWED_HIDDEN_DIRS.contains(&name.as_ref());
        }
        return false;
    }

    ALWAYS_IGNORED_FILES.contains(&name.as_ref())
}

fn symlink_stays_inside(path: &Path, root: &Path) -> bool {
    let Ok(target) = fs::read_link(path) else {
        return false;
    };
    let resolved = if target.is_absolute() {
        target
    } else {
        path.parent().unwrap_or(path).join(target)
    };
    match resolved.canonicalize() {
        Ok(canonical) => canonical.is_file() && canonical.starts_with(root),
        Err(_) => false,
    }
}

fn relative_posix_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
