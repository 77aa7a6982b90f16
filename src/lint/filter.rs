//! Diagnostic line filtering for lines-only mode
//!
//! Linter output is treated as opaque except for one shape: diagnostics of
//! the form `<severity-letter>:<line-number>:<message>`. Only `C` and `W`
//! severities are recognized; anything else passes through the filter
//! unretained.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Diagnostic line grammar. Tolerates optional whitespace after the
/// colons so RuboCop's simple format is accepted as-is.
static DIAGNOSTIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([CW]):\s*(\d+):").unwrap());

/// Restrict one file's raw linter output to diagnostics on changed lines.
///
/// Returns the surviving diagnostics prefixed with a header naming the
/// file, or None when nothing survives.
pub fn filter_output(file: &str, raw: &str, changed_lines: &BTreeSet<usize>) -> Option<String> {
    let kept: Vec<&str> = raw
        .lines()
        .filter(|line| {
            diagnostic_line_number(line)
                .map(|n| changed_lines.contains(&n))
                .unwrap_or(false)
        })
        .collect();

    if kept.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(file.len() + raw.len());
    out.push_str(file);
    out.push('\n');
    for line in kept {
        out.push_str(line);
        out.push('\n');
    }
    Some(out)
}

/// Extract the line number from a diagnostic line, if it has the expected
/// shape and a recognized severity letter.
pub fn diagnostic_line_number(line: &str) -> Option<usize> {
    let caps = DIAGNOSTIC.captures(line)?;
    caps[2].parse().ok()
}
