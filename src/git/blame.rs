//! Uncommitted line attribution via `git blame`
//!
//! Git marks lines that are not yet committed with an all-zero revision
//! identifier in blame output. Those are exactly the lines attributable
//! to the current working-copy edits.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::git_command_optional;

/// Default-format blame line: all-zero revision (possibly caret-prefixed
/// boundary marker or shortened), then anything up to the line number
/// closing with `)`.
static UNCOMMITTED_BLAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\^?0+ .*?(\d+)\)").unwrap());

/// Get the line numbers of uncommitted edits in one file.
///
/// Lines whose attributed revision is the zero placeholder are considered
/// locally changed. Blame failures (e.g. an untracked file) yield an
/// empty set.
pub fn uncommitted_lines(file: &str, cwd: Option<&Path>) -> BTreeSet<usize> {
    let output = match git_command_optional(&["blame", "--", file], cwd) {
        Some(out) => out,
        None => return BTreeSet::new(),
    };

    parse_blame_output(&output)
}

fn parse_blame_output(output: &str) -> BTreeSet<usize> {
    let mut lines = BTreeSet::new();

    for line in output.lines() {
        if let Some(caps) = UNCOMMITTED_BLAME.captures(line) {
            if let Ok(n) = caps[1].parse::<usize>() {
                lines.insert(n);
            }
        }
    }

    lines
}
