// code-tour/src/viewer.rs
//! Single-screen file preview: header, total line count, then the first
//! `PREVIEW_LINES` lines with right-justified numbers. Anything past the
//! budget is elided with an explicit "N more" footer pointing at the source.

use std::{
    fs,
    io::Write,
    path::Path,
};

/// Fixed preview budget. Deliberately not configurable: the tour shows one
/// screenful and points at the file for the rest.
pub const PREVIEW_LINES: usize = 50;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// Print a numbered preview of `rel_path` (resolved against `root`).
///
/// Missing files and read failures are reported inline and return `Ok`;
/// `Err` only surfaces failures writing to `out`.
pub fn show_file(
    out: &mut impl Write,
    root: &Path,
    rel_path: &str,
    description: &str,
) -> std::io::Result<()> {
    let full_path = root.join(rel_path);
    if !full_path.is_file() {
        writeln!(out, "file not found: {rel_path}")?;
        return Ok(());
    }

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{description}")?;
    writeln!(out, "File: {rel_path}")?;
    writeln!(out, "{RULE}")?;

    let content = match fs::read_to_string(&full_path) {
        Ok(c) => c,
        Err(e) => {
            writeln!(out, "error reading {rel_path}: {e}")?;
            return Ok(());
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();

    writeln!(out, "Total lines: {total}")?;
    writeln!(out, "{THIN_RULE}")?;

    for (i, line) in lines.iter().take(PREVIEW_LINES).enumerate() {
        writeln!(out, "{:>3} | {line}", i + 1)?;
    }

    if total > PREVIEW_LINES {
        writeln!(out, "... ({} more lines)", total - PREVIEW_LINES)?;
        writeln!(out, "Full content: {rel_path}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn render(root: &Path, rel: &str) -> String {
        let mut buf = Vec::new();
        show_file(&mut buf, root, rel, "Fixture").expect("render");
        String::from_utf8(buf).expect("utf8 output")
    }

    fn fixture_with_lines(n: usize) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("tempdir");
        let body: String = (1..=n).map(|i| format!("line {i}\n")).collect();
        fs::write(dir.path().join("f.txt"), body).expect("write fixture");
        (dir, "f.txt".to_string())
    }

    #[test]
    fn fifty_lines_no_footer() {
        let (dir, rel) = fixture_with_lines(50);
        let out = render(dir.path(), &rel);
        assert!(out.contains("Total lines: 50"));
        assert!(out.contains(" 50 | line 50"));
        assert!(!out.contains("more lines"));
    }

    #[test]
    fn fifty_one_lines_elides_one() {
        let (dir, rel) = fixture_with_lines(51);
        let out = render(dir.path(), &rel);
        assert!(out.contains("... (1 more lines)"));
        assert!(out.contains("Full content: f.txt"));
        assert!(!out.contains(" 51 | "));
    }

    #[test]
    fn empty_file_prints_zero_and_no_rows() {
        let (dir, rel) = fixture_with_lines(0);
        let out = render(dir.path(), &rel);
        assert!(out.contains("Total lines: 0"));
        assert!(!out.contains(" | "));
        assert!(!out.contains("more lines"));
    }

    #[test]
    fn missing_file_is_a_notice_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = render(dir.path(), "nope/missing.rs");
        assert!(out.contains("file not found: nope/missing.rs"));
    }

    #[test]
    fn line_numbers_are_right_justified() {
        let (dir, rel) = fixture_with_lines(3);
        let out = render(dir.path(), &rel);
        assert!(out.contains("  1 | line 1"));
        assert!(out.contains("  3 | line 3"));
    }
}
