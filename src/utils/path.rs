//! Path utilities: expand ~ in user-supplied paths, recognise stdin.

use std::path::{Path, PathBuf};

/// Input name meaning "read the records from standard input".
pub const STDIN_MARKER: &str = "-";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_stdin(input: &str) -> bool {
    input == STDIN_MARKER
}

/// Lower-cased extension of `path`, if any.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
