//! Heuristics for telling displayable text apart from binary content.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Sniffs the first `check_bytes` of a file for null bytes.
///
/// A null byte in the prefix counts as binary; anything else is assumed to be
/// text. Cheap on purpose -- this runs on every preview request.
pub fn is_binary_file(path: &Path, check_bytes: usize) -> std::io::Result<bool> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; check_bytes];
    let bytes_read = reader.read(&mut buffer)?;
    Ok(buffer[..bytes_read].contains(&0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn plain_text_is_not_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\nworld\n").unwrap();
        assert!(!is_binary_file(&path, 8192).unwrap());
    }

    #[test]
    fn null_bytes_mean_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bin");
        fs::write(&path, b"ELF\x00\x01\x02").unwrap();
        assert!(is_binary_file(&path, 8192).unwrap());
    }

    #[test]
    fn empty_file_is_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();
        assert!(!is_binary_file(&path, 8192).unwrap());
    }
}
