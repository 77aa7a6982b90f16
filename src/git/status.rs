//! Local change detection from `git status --short`

use std::path::Path;

use super::git_command_optional;

/// Get files with uncommitted local changes.
///
/// Parses short-form status output. Entries whose status marker contains
/// `D` are deleted and excluded; the path is the trailing token, which for
/// renames (`R  old -> new`) is the new name.
pub fn local_changed_files(cwd: Option<&Path>) -> Vec<String> {
    let output = match git_command_optional(&["status", "--short"], cwd) {
        Some(out) => out,
        None => return Vec::new(),
    };

    parse_short_status(&output)
}

/// Get untracked files from short status (`??` marker).
///
/// Lines-only filtering is undefined for a brand-new file, so the runner
/// prints those files' linter output unfiltered.
pub fn untracked_files(cwd: Option<&Path>) -> Vec<String> {
    let output = match git_command_optional(&["status", "--short"], cwd) {
        Some(out) => out,
        None => return Vec::new(),
    };

    output
        .lines()
        .filter(|line| line.starts_with("??"))
        .filter_map(|line| line.split_whitespace().last())
        .map(|path| path.to_string())
        .collect()
}

/// Parse short-form status output into candidate paths
fn parse_short_status(output: &str) -> Vec<String> {
    let mut files = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        // First two columns are the index/worktree status markers
        let marker: String = line.chars().take(2).collect();
        if marker.contains('D') {
            continue;
        }

        if let Some(path) = line.split_whitespace().last() {
            files.push(path.to_string());
        }
    }

    files
}
