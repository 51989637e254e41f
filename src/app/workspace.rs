//! The collaborator boundary: filesystem access and native dialogs.
//!
//! Both are traits so tests can substitute doubles without touching the real
//! filesystem or opening OS dialog windows.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::{lister, reader, CoreError, TreeNode};

/// Provides the two external operations the browser depends on.
#[async_trait]
pub trait WorkspaceProvider: Send + Sync + 'static {
    /// Lists a fully-populated tree snapshot for `root`.
    async fn list_tree(&self, root: &Path) -> Result<TreeNode, CoreError>;

    /// Reads at most `max_bytes` of text from `rel_path` under `root`.
    async fn read_file(
        &self,
        root: &Path,
        rel_path: &str,
        max_bytes: u64,
    ) -> Result<String, CoreError>;
}

/// Production provider backed by the real filesystem.
///
/// The walk and the read are blocking, so both are pushed onto the blocking
/// pool; the caller's event loop never stalls on I/O.
pub struct FsWorkspaceProvider;

#[async_trait]
impl WorkspaceProvider for FsWorkspaceProvider {
    async fn list_tree(&self, root: &Path) -> Result<TreeNode, CoreError> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || lister::list_tree(&root)).await?
    }

    async fn read_file(
        &self,
        root: &Path,
        rel_path: &str,
        max_bytes: u64,
    ) -> Result<String, CoreError> {
        let root = root.to_path_buf();
        let rel_path = rel_path.to_string();
        tokio::task::spawn_blocking(move || reader::read_text_file(&root, &rel_path, max_bytes))
            .await?
    }
}

/// Defines a common interface for folder selection dialogs.
pub trait DialogService: Send + Sync {
    /// Opens a dialog to select a single directory. `None` means the user
    /// cancelled; cancellation is not an error.
    fn pick_directory(&self) -> Option<PathBuf>;
}

/// The production implementation that uses the `rfd` crate to show native OS
/// dialogs.
pub struct NativeDialogService;

impl DialogService for NativeDialogService {
    fn pick_directory(&self) -> Option<PathBuf> {
        rfd::FileDialog::new().pick_folder()
    }
}
