//! lintdiff: run style checkers on the files (and lines) you actually changed
//!
//! This library detects which files changed in a git working copy or
//! relative to a reference branch, routes each changed file to a configured
//! style checker by extension, and optionally restricts the checkers'
//! output to the lines the user actually touched.
//!
//! # Linter groups
//!
//! - Ruby (`.rb`) — RuboCop
//! - JavaScript (`.js`) — ESLint
//! - ERB templates (`.erb`) — erblint
//! - Stylesheets (`.scss`, `.sass`, `.css`) — Stylelint
//!
//! # Example
//!
//! ```ignore
//! use lintdiff::{run_checks, Cli, Config};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["lintdiff", "--lines-only"]);
//! let config = Config::from_cli(&cli);
//! let report = run_checks(&config, None)?;
//! for group in &report.groups {
//!     print!("{}", group.output);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod lint;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{LintDiffError, Result};
pub use lint::{
    filter_output, group_by_tag, registry, run_checks, GroupReport, LinterKind, LinterSpec,
    RunReport,
};

// Re-export git module surface
pub use git::{
    branch_changed_files, branch_changed_lines, hunk_line_ranges, local_changed_files,
    uncommitted_lines, untracked_files,
};
