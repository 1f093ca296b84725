// code-tour/src/util.rs

use memchr::memchr_iter;
use std::{
    fmt,
    fs,
    path::Path,
};

/// Line count of a file, or `Unknown` when the file cannot be read.
/// Display-only: menu rendering must never trip over an unreadable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCount {
    Exact(usize),
    Unknown,
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCount::Exact(n) => write!(f, "{n}"),
            LineCount::Unknown => write!(f, "?"),
        }
    }
}

/// Count newline-delimited records in `path`. A trailing partial line counts
/// as one record. Any I/O failure yields `Unknown` rather than an error.
pub fn count_lines(path: &Path) -> LineCount {
    match fs::read(path) {
        Ok(bytes) => {
            let newlines = memchr_iter(b'\n', &bytes).count();
            let dangling = usize::from(bytes.last().is_some_and(|&b| b != b'\n'));
            LineCount::Exact(newlines + dangling)
        }
        Err(_) => LineCount::Unknown,
    }
}
