// code-tour/src/session.rs
//! The interactive read-evaluate-print loop. Input parsing is split from
//! dispatch (`parse_choice` → `Choice`) so the command grammar is testable
//! without a terminal. Once the loop is running, no component error is
//! allowed to end the session: everything degrades to an inline message.

use crate::{
    catalog,
    checks,
    tree_view,
    util,
    viewer,
};
use std::{
    io::{
        BufRead,
        Write,
    },
    path::PathBuf,
};

const RULE: &str = "============================================================";

/// One parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    ShowTree,
    ShowDoc,
    RunChecks,
    ShowFile(usize),
    Invalid,
}

/// Normalize one input line and map it onto a `Choice`. `menu_len` bounds
/// the valid numeric selections; `0` is the tree, never a file.
pub fn parse_choice(raw: &str, menu_len: usize) -> Choice {
    let cleaned = raw.trim().to_ascii_lowercase();
    match cleaned.as_str() {
        "q" => Choice::Quit,
        "0" => Choice::ShowTree,
        "a" => Choice::ShowDoc,
        "t" => Choice::RunChecks,
        s if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => match s.parse::<usize>() {
            Ok(n) if (1..=menu_len).contains(&n) => Choice::ShowFile(n - 1),
            _ => Choice::Invalid,
        },
        _ => Choice::Invalid,
    }
}

/// A running tour: the resolved project root plus the (injectable) catalogue.
pub struct Session<'a> {
    root: PathBuf,
    stops: &'a [(&'a str, &'a str)],
}

impl<'a> Session<'a> {
    pub fn new(root: PathBuf, stops: &'a [(&'a str, &'a str)]) -> Self {
        Session { root, stops }
    }

    /// Drive the loop until `q` or end of input. `Err` only surfaces
    /// failures on the output sink itself.
    pub fn run(&self, mut input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
        self.print_banner(&mut out)?;

        loop {
            self.print_menu(&mut out)?;
            write!(out, "\nChoose (1-{}, 0, a, t, q): ", self.stops.len())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // closed stdin ends the session like `q` would
                writeln!(out, "\nBye!")?;
                return Ok(());
            }

            match parse_choice(&line, self.stops.len()) {
                Choice::Quit => {
                    writeln!(out, "Bye!")?;
                    return Ok(());
                }
                Choice::ShowTree => {
                    if let Err(e) = tree_view::show_tree(&mut out, &self.root) {
                        writeln!(out, "error rendering tree: {e}")?;
                    }
                }
                Choice::ShowDoc => self.show_architecture_doc(&mut out)?,
                Choice::RunChecks => {
                    if let Err(e) = checks::run_checks(&mut out, &mut input, &self.root) {
                        writeln!(out, "error running checks: {e}")?;
                    }
                }
                Choice::ShowFile(idx) => {
                    let (label, path) = self.stops[idx];
                    viewer::show_file(&mut out, &self.root, path, label)?;
                }
                Choice::Invalid => writeln!(out, "invalid choice, try again")?,
            }

            write!(out, "\nPress Enter to continue...")?;
            out.flush()?;
            let mut ack = String::new();
            if input.read_line(&mut ack)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
        }
    }

    fn print_banner(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "\n{RULE}")?;
        writeln!(out, "CODE TOUR")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "A fast orientation pass over the project's core modules.")?;
        writeln!(out, "Pick a number to read a module; the order is the suggested path.")?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    fn print_menu(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "\nModules:")?;
        for (i, (label, path)) in self.stops.iter().enumerate() {
            let lines = util::count_lines(&self.root.join(path));
            writeln!(out, "  {}. {label:<24} ({path}) - {lines} lines", i + 1)?;
        }
        writeln!(out)?;
        writeln!(out, "  0. Show project structure")?;
        writeln!(out, "  a. Show architecture doc")?;
        writeln!(out, "  t. Run quick checks")?;
        writeln!(out, "  q. Quit")?;
        Ok(())
    }

    fn show_architecture_doc(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.root.join(catalog::ARCHITECTURE_DOC).is_file() {
            viewer::show_file(out, &self.root, catalog::ARCHITECTURE_DOC, "Architecture documentation")
        } else {
            writeln!(out, "architecture doc not found ({})", catalog::ARCHITECTURE_DOC)
        }
    }
}
