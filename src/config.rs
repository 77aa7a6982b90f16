//! Run configuration
//!
//! Built once from the parsed CLI and passed by reference into every
//! component; no ambient global state.

use crate::cli::{Cli, OutputFormat};

/// Read-only configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Verbose output
    pub verbose: bool,

    /// Dry run: print composed commands, execute nothing
    pub test: bool,

    /// Only run the group with this tag
    pub file_type: Option<String>,

    /// Reference branch to diff against (None = local changes only)
    pub branch: Option<String>,

    /// Restrict output to changed lines
    pub lines_only: bool,

    /// Pass auto-correct flags through to linters that support them
    pub auto_correct: bool,

    /// Install missing tools instead of skipping them
    pub install: bool,

    /// Output format for the run report
    pub format: OutputFormat,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            test: cli.test,
            file_type: cli.file_type.clone(),
            branch: cli.branch.clone(),
            lines_only: cli.lines_only,
            auto_correct: cli.auto_correct,
            install: cli.install,
            format: cli.format,
        }
    }

    /// Whether branch comparison is active
    pub fn branch_mode(&self) -> bool {
        self.branch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_carries_flags() {
        let cli = Cli::parse_from(["lintdiff", "-v", "-l", "--branch", "trunk"]);
        let config = Config::from_cli(&cli);
        assert!(config.verbose);
        assert!(config.lines_only);
        assert!(config.branch_mode());
        assert_eq!(config.branch.as_deref(), Some("trunk"));
    }

    #[test]
    fn test_branch_mode_off_by_default() {
        let cli = Cli::parse_from(["lintdiff"]);
        let config = Config::from_cli(&cli);
        assert!(!config.branch_mode());
    }
}
