//! Git operations for change detection
//!
//! Every question this tool asks git goes through subprocess calls for
//! maximum compatibility: short status for local changes, name-only diff
//! for branch changes, `-U0` diffs and blame for changed line numbers.

mod blame;
mod diff;
mod status;

pub use blame::uncommitted_lines;
pub use diff::{branch_changed_files, branch_changed_lines, hunk_line_ranges};
pub use status::{local_changed_files, untracked_files};

use std::path::Path;
use std::process::Command;

use crate::error::{LintDiffError, Result};

/// Fixed install command suggested (or run) when git itself is absent
pub const GIT_INSTALL_COMMAND: &str = "brew install git";

/// Run a git command and return stdout as string
pub fn git_command(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    tracing::debug!(?args, "spawning git");

    let mut cmd = Command::new("git");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| LintDiffError::GitError {
        message: format!("Failed to execute git: {}", e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LintDiffError::GitError {
            message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command, returning None if it fails (for optional queries)
pub fn git_command_optional(args: &[&str], cwd: Option<&Path>) -> Option<String> {
    git_command(args, cwd).ok()
}

/// Check that the git binary exists on PATH.
///
/// This is the one fatal precondition: without git there is nothing to
/// diff, so the run aborts before any linting. With `install` set the
/// fixed install command is attempted first.
pub fn ensure_git(install: bool) -> Result<()> {
    if which::which("git").is_ok() {
        return Ok(());
    }

    if install {
        eprintln!(
            "{} git not found, running: {}",
            console::style("→").cyan(),
            GIT_INSTALL_COMMAND
        );
        run_installer(GIT_INSTALL_COMMAND)?;
        if which::which("git").is_ok() {
            return Ok(());
        }
    }

    Err(LintDiffError::GitMissing {
        install_hint: GIT_INSTALL_COMMAND.to_string(),
    })
}

/// Run a package-installer command line through the shell
pub fn run_installer(command: &str) -> Result<()> {
    tracing::debug!(command, "spawning installer");

    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|e| LintDiffError::GitError {
            message: format!("Failed to run installer `{}`: {}", command, e),
        })?;

    if !status.success() {
        eprintln!(
            "{} installer `{}` exited with {}",
            console::style("✗").red(),
            command,
            status
        );
    }

    Ok(())
}
