//! Bounded reading of workspace files for display.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::CoreError;
use crate::utils::file_detection::is_binary_file;

/// Read budget applied when the configuration does not override it.
pub const DEFAULT_MAX_READ_BYTES: u64 = 200 * 1024;

const BINARY_SNIFF_BYTES: usize = 8192;

/// Reads the file at `rel_path` under `root`, rejecting anything that cannot
/// be displayed as text.
///
/// Fails with [`CoreError::FileUnreadable`] for paths that resolve outside
/// the root, non-files, files over `max_bytes`, binary content, and plain I/O
/// errors.
pub fn read_text_file(root: &Path, rel_path: &str, max_bytes: u64) -> Result<String, CoreError> {
    let native_rel = rel_path.replace('/', std::path::MAIN_SEPARATOR_STR);
    let file_path = root.join(native_rel);
    let canonical = validate_within_root(&file_path, root)?;

    if !canonical.is_file() {
        return Err(CoreError::FileUnreadable(format!("not a file: {rel_path}")));
    }

    let metadata = fs::metadata(&canonical)
        .map_err(|e| CoreError::FileUnreadable(format!("failed to read file metadata: {e}")))?;
    if metadata.len() > max_bytes {
        return Err(CoreError::FileUnreadable(format!(
            "file too large: {} bytes (max: {} bytes)",
            metadata.len(),
            max_bytes
        )));
    }

    if is_binary_file(&canonical, BINARY_SNIFF_BYTES).unwrap_or(false) {
        return Err(CoreError::FileUnreadable(
            "cannot display binary file".to_string(),
        ));
    }

    fs::read_to_string(&canonical)
        .map_err(|e| CoreError::FileUnreadable(format!("failed to read file: {e}")))
}

fn validate_within_root(path: &Path, root: &Path) -> Result<PathBuf, CoreError> {
    let canonical_root = root
        .canonicalize()
        .map_err(|e| CoreError::FileUnreadable(format!("failed to resolve root: {e}")))?;
    let canonical_path = path
        .canonicalize()
        .map_err(|e| CoreError::FileUnreadable(format!("failed to resolve path: {e}")))?;

    if canonical_path.starts_with(&canonical_root) {
        Ok(canonical_path)
    } else {
        Err(CoreError::FileUnreadable(
            "path escapes the workspace root".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();

        let content = read_text_file(dir.path(), "src/lib.rs", DEFAULT_MAX_READ_BYTES).unwrap();
        assert_eq!(content, "pub fn f() {}\n");
    }

    #[test]
    fn rejects_files_over_the_byte_budget() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("big.txt"), "0123456789").unwrap();

        let err = read_text_file(dir.path(), "big.txt", 4).unwrap_err();
        assert!(matches!(err, CoreError::FileUnreadable(_)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn rejects_binary_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.dat"), b"\x00\x01\x02").unwrap();

        let err = read_text_file(dir.path(), "blob.dat", DEFAULT_MAX_READ_BYTES).unwrap_err();
        assert!(err.to_string().contains("binary"));
    }

    #[test]
    fn rejects_path_traversal() {
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("secret.txt"), "s").unwrap();
        let root = outer.path().join("ws");
        fs::create_dir(&root).unwrap();

        let err = read_text_file(&root, "../secret.txt", DEFAULT_MAX_READ_BYTES).unwrap_err();
        assert!(matches!(err, CoreError::FileUnreadable(_)));
    }

    #[test]
    fn rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let err = read_text_file(dir.path(), "sub", DEFAULT_MAX_READ_BYTES).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }
}
