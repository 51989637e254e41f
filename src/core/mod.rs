pub mod error;
pub mod filter;
pub mod formatter;
pub mod lister;
pub mod reader;

use serde::{Deserialize, Serialize};

/// Whether a tree entry is a file or a directory.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Dir,
}

/// One entry in the immutable workspace tree snapshot.
///
/// `path` is relative to the workspace root, `/`-separated on every platform
/// and unique across the whole tree; the root node itself carries the empty
/// path. `children` is present only for directories, in the order the lister
/// produced -- nothing downstream re-sorts it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_too_large: bool,
}

impl TreeNode {
    pub fn dir(name: impl Into<String>, path: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Dir,
            children: Some(children),
            size_bytes: None,
            is_too_large: false,
        }
    }

    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        size_bytes: Option<u64>,
        is_too_large: bool,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            children: None,
            size_bytes,
            is_too_large,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }

    /// The node's children, or an empty slice for files.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

pub use error::CoreError;
pub use formatter::FileView;
