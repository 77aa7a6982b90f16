//! Error types and exit codes for lintdiff

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for lintdiff operations
#[derive(Error, Debug)]
pub enum LintDiffError {
    #[error("git is not installed. Install it with: {install_hint}")]
    GitMissing { install_hint: String },

    #[error("Git error: {message}")]
    GitError { message: String },

    #[error("Unknown linter group: {tag}")]
    UnknownGroup { tag: String },

    #[error("Output error: {message}")]
    OutputError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintDiffError {
    /// Convert error to an exit code:
    /// - 1: missing or failing git, IO error
    /// - 2: unknown group tag passed to the file-type filter
    ///
    /// Style violations reported by linters never affect the exit code;
    /// this tool is a reporting aid, not a gate.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::GitMissing { .. } => ExitCode::from(1),
            Self::GitError { .. } => ExitCode::from(1),
            Self::UnknownGroup { .. } => ExitCode::from(2),
            Self::OutputError { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for lintdiff operations
pub type Result<T> = std::result::Result<T, LintDiffError>;
