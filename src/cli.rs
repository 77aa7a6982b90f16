//! CLI argument definitions using clap
//!
//! lintdiff is a single-purpose tool, so the interface is one flat command:
//! pick where changed files come from, optionally narrow to one linter
//! group, and choose how much of the linters' output to keep.

use clap::{Parser, ValueEnum};

/// Run style checkers on the files (and lines) you actually changed
#[derive(Parser, Debug)]
#[command(name = "lintdiff")]
#[command(about = "Detect changed files and dispatch them to the right style checker")]
#[command(version)]
pub struct Cli {
    /// Show verbose output (routed files, skipped groups, missing tools)
    #[arg(short, long)]
    pub verbose: bool,

    /// Dry run: print the commands that would run, execute nothing
    #[arg(short, long)]
    pub test: bool,

    /// Only run the linter group with this tag (ruby, script, template, stylesheet)
    #[arg(long = "type", value_name = "TAG")]
    pub file_type: Option<String>,

    /// Also compare against a reference branch (defaults to main)
    #[arg(
        short,
        long,
        value_name = "BRANCH",
        num_args = 0..=1,
        default_missing_value = "main"
    )]
    pub branch: Option<String>,

    /// Restrict linter output to lines you actually changed
    #[arg(short, long)]
    pub lines_only: bool,

    /// Pass each linter its auto-correct flag
    #[arg(short = 'a', long = "auto-correct")]
    pub auto_correct: bool,

    /// Install any missing linter (and git itself) instead of skipping it
    #[arg(short, long)]
    pub install: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw linter output, one group after another
    Text,
    /// Structured run report as JSON
    Json,
}
