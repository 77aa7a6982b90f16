//! Linter execution and result collection.
//!
//! The runner walks the group registry in order, routes the changed files
//! to each group, and either composes commands (test mode), reports or
//! installs a missing tool, or runs the tool and collects its output.
//! Everything is synchronous; each external process finishes before the
//! next begins.

use std::collections::BTreeSet;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::Result;
use crate::git::{
    branch_changed_files, branch_changed_lines, ensure_git, local_changed_files, run_installer,
    uncommitted_lines, untracked_files,
};
use crate::lint::filter::filter_output;
use crate::lint::registry::{registry, route, validate_filter};
use crate::lint::types::{GroupReport, LinterSpec, RunReport};

/// Run all configured checks and collect a run report.
///
/// Fatal only when git is absent; a missing linter binary is reported or
/// installed and its group skipped.
pub fn run_checks(config: &Config, cwd: Option<&Path>) -> Result<RunReport> {
    ensure_git(config.install)?;

    if let Some(ref tag) = config.file_type {
        validate_filter(tag)?;
    }

    let changed_files = collect_changed_files(config, cwd);
    let untracked: Vec<String> = if config.lines_only {
        untracked_files(cwd)
    } else {
        Vec::new()
    };

    if config.verbose {
        eprintln!("Changed files: {}", changed_files.join(", "));
    }

    let mut groups = Vec::new();

    for spec in registry() {
        if let Some(ref tag) = config.file_type {
            if spec.tag != *tag {
                continue;
            }
        }

        let matched = route(spec, &changed_files);
        if config.verbose {
            eprintln!(
                "{} {} ({}): {} file(s)",
                console::style("•").cyan(),
                spec.kind.display_name(),
                spec.tag,
                matched.len()
            );
        }

        groups.push(run_group(spec, &matched, &untracked, config, cwd));
    }

    Ok(RunReport {
        changed_files,
        groups,
    })
}

/// Candidate files: local uncommitted changes, plus the branch diff when
/// branch mode is active. Union, deduplicated, first-seen order.
fn collect_changed_files(config: &Config, cwd: Option<&Path>) -> Vec<String> {
    let mut files = local_changed_files(cwd);

    if let Some(ref branch) = config.branch {
        files.extend(branch_changed_files(branch, cwd));
    }

    let mut seen = BTreeSet::new();
    files.retain(|f| seen.insert(f.clone()));
    files
}

/// Run (or dry-run) one linter group over its matched files
fn run_group(
    spec: &LinterSpec,
    matched: &[&str],
    untracked: &[String],
    config: &Config,
    cwd: Option<&Path>,
) -> GroupReport {
    let mut report = GroupReport {
        linter: spec.kind,
        tag: spec.tag.to_string(),
        files: matched.iter().map(|f| f.to_string()).collect(),
        available: true,
        commands: Vec::new(),
        output: String::new(),
    };

    if matched.is_empty() {
        return report;
    }

    // Test mode composes the commands and stops; no presence check, so
    // the dry run is deterministic on machines without the tools.
    if config.test {
        if config.lines_only {
            for &file in matched {
                report
                    .commands
                    .push(spec.command_line(config.auto_correct, &[file]));
            }
        } else {
            report
                .commands
                .push(spec.command_line(config.auto_correct, matched));
        }
        return report;
    }

    if which::which(spec.program).is_err() {
        report.available = false;
        if config.install {
            eprintln!(
                "{} {} not found, running: {}",
                console::style("→").cyan(),
                spec.program,
                spec.install_command
            );
            if run_installer(spec.install_command).is_err() {
                return report;
            }
            if which::which(spec.program).is_err() {
                return report;
            }
            report.available = true;
        } else {
            if config.verbose {
                eprintln!(
                    "{} {} is not installed. Install it with: {}",
                    console::style("✗").red(),
                    spec.program,
                    spec.install_command
                );
            }
            return report;
        }
    }

    if config.lines_only {
        for &file in matched {
            report
                .commands
                .push(spec.command_line(config.auto_correct, &[file]));
            let Some(raw) = invoke(spec, config.auto_correct, &[file]) else {
                continue;
            };

            if untracked.iter().any(|u| u.as_str() == file) {
                // Changed lines are undefined for a brand-new file
                report.output.push_str(&raw);
                continue;
            }

            let changed = changed_lines(file, config, cwd);
            if let Some(filtered) = filter_output(file, &raw, &changed) {
                report.output.push_str(&filtered);
            }
        }
    } else {
        report
            .commands
            .push(spec.command_line(config.auto_correct, matched));
        if let Some(raw) = invoke(spec, config.auto_correct, matched) {
            report.output.push_str(&raw);
        }
    }

    report
}

/// Changed-line set for one file: uncommitted blame lines, unioned with
/// branch-diff hunk lines when branch mode is active.
fn changed_lines(file: &str, config: &Config, cwd: Option<&Path>) -> BTreeSet<usize> {
    let mut lines = uncommitted_lines(file, cwd);

    if let Some(ref branch) = config.branch {
        lines.extend(branch_changed_lines(file, branch, cwd));
    }

    lines
}

/// Invoke a linter, capturing stdout and discarding its error stream
fn invoke(spec: &LinterSpec, auto_correct: bool, files: &[&str]) -> Option<String> {
    let args = spec.compose_args(auto_correct, files);
    tracing::debug!(program = spec.program, ?args, "spawning linter");

    let output = Command::new(spec.program)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) => Some(String::from_utf8_lossy(&out.stdout).to_string()),
        Err(e) => {
            eprintln!("Warning: {} failed to run: {}", spec.kind.display_name(), e);
            None
        }
    }
}
