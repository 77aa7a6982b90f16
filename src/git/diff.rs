//! Branch diff operations
//!
//! Name-only diffs produce the candidate file list; `-U0` diffs produce
//! the per-file changed-line ranges from unified-diff hunk headers.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::git_command_optional;

/// Hunk header of the form `@@ -<old> +<new-start>[,<new-count>] @@`.
/// Only the new-side start and count matter for changed-line extraction.
static HUNK_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@@ -\d+(?:,\d+)? \+(\d+)(?:,(\d+))? @@").unwrap());

/// Get files changed relative to a reference branch
pub fn branch_changed_files(branch: &str, cwd: Option<&Path>) -> Vec<String> {
    let output = match git_command_optional(&["diff", "--name-only", branch], cwd) {
        Some(out) => out,
        None => return Vec::new(),
    };

    output
        .split_whitespace()
        .map(|path| path.to_string())
        .collect()
}

/// Get the line numbers added in one file relative to a reference branch.
///
/// Runs a zero-context diff so every hunk header's new-side range covers
/// exactly the added lines.
pub fn branch_changed_lines(file: &str, branch: &str, cwd: Option<&Path>) -> BTreeSet<usize> {
    let output = match git_command_optional(&["diff", "-U0", branch, "--", file], cwd) {
        Some(out) => out,
        None => return BTreeSet::new(),
    };

    hunk_line_ranges(&output)
}

/// Extract the union of new-side line ranges from unified-diff hunk headers.
///
/// A header with no explicit count spans a single line. Lines that do not
/// match the hunk-header grammar contribute nothing.
pub fn hunk_line_ranges(diff: &str) -> BTreeSet<usize> {
    let mut lines = BTreeSet::new();

    for line in diff.lines() {
        let caps = match HUNK_HEADER.captures(line) {
            Some(caps) => caps,
            None => continue,
        };

        let start: usize = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let count: usize = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1);

        for n in start..start + count {
            lines.insert(n);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunk_with_count() {
        let diff = "@@ -4,0 +10,3 @@ fn main() {";
        let lines = hunk_line_ranges(diff);
        assert_eq!(lines, BTreeSet::from([10, 11, 12]));
    }

    #[test]
    fn test_hunk_without_count_is_single_line() {
        let diff = "@@ -7 +25 @@";
        let lines = hunk_line_ranges(diff);
        assert_eq!(lines, BTreeSet::from([25]));
    }

    #[test]
    fn test_multiple_hunks_union() {
        let diff = "@@ -1,2 +1,2 @@\n-a\n+b\n@@ -9 +10,4 @@\n+c";
        let lines = hunk_line_ranges(diff);
        assert_eq!(lines, BTreeSet::from([1, 2, 10, 11, 12, 13]));
    }

    #[test]
    fn test_zero_count_hunk_contributes_nothing() {
        // Pure deletion: new side spans zero lines
        let diff = "@@ -5,2 +4,0 @@";
        assert!(hunk_line_ranges(diff).is_empty());
    }

    #[test]
    fn test_malformed_header_ignored() {
        let diff = "@@ garbage @@\nnot a header\n@@ -1 +oops @@";
        assert!(hunk_line_ranges(diff).is_empty());
    }

    #[test]
    fn test_non_header_lines_ignored() {
        let diff = "diff --git a/f b/f\nindex 123..456\n--- a/f\n+++ b/f\n@@ -1 +2,2 @@\n+x\n+y";
        assert_eq!(hunk_line_ranges(diff), BTreeSet::from([2, 3]));
    }
}
