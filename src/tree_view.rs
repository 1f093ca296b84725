// code-tour/src/tree_view.rs
//! Project structure rendering. Primary path shells out to the external
//! `tree` utility; when that is missing or unhappy we fall back to a small
//! in-process walker. Two plain functions tried in sequence — there is
//! exactly one fallback and nothing to extend.

use crate::catalog;
use std::{
    io::Write,
    path::Path,
    process::Command,
};

/// At most this many files are listed per directory in the fallback walker.
/// Overflow is silently dropped; directories are never capped.
const MAX_FILES_PER_DIR: usize = 10;

const RULE: &str = "============================================================";

/// Render the project tree rooted at `root`, excluding
/// [`catalog::EXCLUDED_DIRS`] at every depth.
pub fn show_tree(out: &mut impl Write, root: &Path) -> std::io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "Project structure")?;
    writeln!(out, "{RULE}")?;

    if external_tree(out, root)? {
        return Ok(());
    }

    let name = root
        .file_name()
        .map_or_else(|| root.display().to_string(), |n| n.to_string_lossy().into_owned());
    writeln!(out, "{name}/")?;
    walk(out, root, "")
}

/// Try the external `tree` utility. `Ok(false)` means "use the fallback":
/// either the binary is absent or it exited non-zero.
fn external_tree(out: &mut impl Write, root: &Path) -> std::io::Result<bool> {
    let output = Command::new("tree")
        .arg("-I")
        .arg(catalog::tree_exclude_pattern())
        .current_dir(root)
        .output();
    match output {
        Ok(o) if o.status.success() => {
            out.write_all(&o.stdout)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Depth-first fallback walker. Sorted entries, hidden names skipped, dirs
/// first (trailing `/`), then at most [`MAX_FILES_PER_DIR`] files. A capped
/// listing prints no corner connector: the true last file was never shown.
fn walk(out: &mut impl Write, dir: &Path, prefix: &str) -> std::io::Result<()> {
    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let (dirs, files): (Vec<String>, Vec<String>) = names
        .into_iter()
        .filter(|n| !n.starts_with('.'))
        .partition(|n| dir.join(n).is_dir());

    for (i, name) in dirs.iter().enumerate() {
        let is_last = i == dirs.len() - 1 && files.is_empty();
        let connector = if is_last { "└── " } else { "├── " };
        writeln!(out, "{prefix}{connector}{name}/")?;

        if !catalog::EXCLUDED_DIRS.contains(&name.as_str()) {
            let extension = if is_last { "    " } else { "│   " };
            walk(out, &dir.join(name), &format!("{prefix}{extension}"))?;
        }
    }

    for (i, name) in files.iter().take(MAX_FILES_PER_DIR).enumerate() {
        let is_last = i == files.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        writeln!(out, "{prefix}{connector}{name}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn render_fallback(root: &Path) -> String {
        let mut buf = Vec::new();
        writeln!(buf, "{}/", root.file_name().unwrap().to_string_lossy()).unwrap();
        walk(&mut buf, root, "").expect("walk");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn excluded_dirs_are_listed_but_never_entered() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("src/target")).unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target/buried.o"), "x").unwrap();
        fs::write(dir.path().join("src/target/nested.o"), "x").unwrap();
        fs::write(dir.path().join("src/lib.rs"), "x").unwrap();

        let out = render_fallback(dir.path());
        assert!(out.contains("target/"));
        assert!(out.contains("lib.rs"));
        assert!(!out.contains("buried.o"));
        // exclusion applies at depth, not just at the root
        assert!(!out.contains("nested.o"));
    }

    #[test]
    fn file_listing_is_capped_at_ten() {
        let dir = tempfile::tempdir().expect("tempdir");
        for i in 0..14 {
            fs::write(dir.path().join(format!("f{i:02}.txt")), "x").unwrap();
        }
        let out = render_fallback(dir.path());
        let listed = out.lines().filter(|l| l.contains(".txt")).count();
        assert_eq!(listed, MAX_FILES_PER_DIR);
        assert!(out.contains("f00.txt"));
        assert!(!out.contains("f10.txt"));
        // the true last file was capped away, so no corner is printed
        assert!(!out.contains("└── "));
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join(".hg")).unwrap();
        fs::write(dir.path().join(".env"), "x").unwrap();
        fs::write(dir.path().join("visible.rs"), "x").unwrap();

        let out = render_fallback(dir.path());
        assert!(out.contains("visible.rs"));
        assert!(!out.contains(".hg"));
        assert!(!out.contains(".env"));
    }

    #[test]
    fn last_sibling_gets_a_corner() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.rs"), "x").unwrap();
        fs::write(dir.path().join("b.rs"), "x").unwrap();

        let out = render_fallback(dir.path());
        // dirs print first and are not last (files follow)
        assert!(out.contains("├── sub/"));
        assert!(out.contains("├── a.rs"));
        assert!(out.contains("└── b.rs"));
    }
}
