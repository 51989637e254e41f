//! Prepares raw file text for display.

use serde::Serialize;

/// A file prepared for rendering: one entry per display line plus a language
/// label the presentation layer may hand to its highlighter.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FileView {
    pub lines: Vec<String>,
    pub language: String,
}

/// Splits `raw` into display lines and derives the language tag from `path`.
///
/// The split is deliberately the naive one: a file ending in a newline shows
/// one trailing empty line, and the empty file shows exactly one empty line.
pub fn format(path: &str, raw: &str) -> FileView {
    FileView {
        lines: raw.split('\n').map(str::to_string).collect(),
        language: language_from_path(path),
    }
}

/// Determines the display language from a file path.
///
/// Looks only at the lowercased extension (the part after the last `.` of the
/// filename). Advisory display metadata; never affects how a file is read or
/// filtered.
pub fn language_from_path(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let extension = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return "plaintext".to_string(),
    };
    match extension.as_str() {
        "rs" => "rust",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "md" => "markdown",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "sh" => "shell",
        "go" => "go",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "hpp" | "cxx" | "hxx" => "cpp",
        _ => "plaintext",
    }
    .to_string()
}
