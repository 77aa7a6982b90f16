//! Core types for the lint module.
//!
//! - `LinterKind` - Enum of the configured style checkers
//! - `LinterSpec` - Static descriptor for one linter group
//! - `GroupReport` / `RunReport` - Serializable results for JSON output

use serde::Serialize;

/// Configured style-checking tools, one per linter group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinterKind {
    /// Ruby (RuboCop)
    Rubocop,
    /// JavaScript (ESLint)
    Eslint,
    /// ERB templates (erblint)
    Erblint,
    /// Stylesheets (Stylelint)
    Stylelint,
}

impl LinterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinterKind::Rubocop => "rubocop",
            LinterKind::Eslint => "eslint",
            LinterKind::Erblint => "erblint",
            LinterKind::Stylelint => "stylelint",
        }
    }

    /// Get the human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LinterKind::Rubocop => "RuboCop",
            LinterKind::Eslint => "ESLint",
            LinterKind::Erblint => "erblint",
            LinterKind::Stylelint => "Stylelint",
        }
    }
}

/// Static descriptor for one linter group.
///
/// The tag doubles as the file-type filter value; when `suffixes` is empty
/// the tag itself is the single extension suffix.
#[derive(Debug, Clone, Copy)]
pub struct LinterSpec {
    /// Which tool this group runs
    pub kind: LinterKind,

    /// Logical group tag (also the `--type` filter value)
    pub tag: &'static str,

    /// The executable to look up and run
    pub program: &'static str,

    /// Base options passed on every invocation
    pub base_args: &'static [&'static str],

    /// Auto-correct flag, appended when auto-correct is enabled
    pub fix_arg: Option<&'static str>,

    /// How to install the tool when it is missing
    pub install_command: &'static str,

    /// File-extension suffixes this group owns (without the leading dot);
    /// empty means "use the tag"
    pub suffixes: &'static [&'static str],
}

impl LinterSpec {
    /// The extension suffixes this group matches, with the tag fallback
    pub fn effective_suffixes(&self) -> &[&'static str] {
        if self.suffixes.is_empty() {
            std::slice::from_ref(&self.tag)
        } else {
            self.suffixes
        }
    }

    /// Whether a path belongs to this group: dot-prefixed, case-sensitive,
    /// anchored to end-of-string.
    pub fn matches(&self, path: &str) -> bool {
        self.effective_suffixes()
            .iter()
            .any(|suffix| path.ends_with(&format!(".{}", suffix)))
    }

    /// Compose the full argument list for an invocation
    pub fn compose_args(&self, auto_correct: bool, files: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = self.base_args.iter().map(|a| a.to_string()).collect();
        if auto_correct {
            if let Some(fix) = self.fix_arg {
                args.push(fix.to_string());
            }
        }
        args.extend(files.iter().map(|f| f.to_string()));
        args
    }

    /// Render the command line as it would be executed (for test mode)
    pub fn command_line(&self, auto_correct: bool, files: &[&str]) -> String {
        let mut parts = vec![self.program.to_string()];
        parts.extend(self.compose_args(auto_correct, files));
        parts.join(" ")
    }
}

/// Result of running (or dry-running) one linter group
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Which linter this group runs
    pub linter: LinterKind,

    /// Group tag
    pub tag: String,

    /// Files routed to this group
    pub files: Vec<String>,

    /// Whether the tool binary was found on PATH (always true in test mode)
    pub available: bool,

    /// Composed command line(s); one entry per invocation
    pub commands: Vec<String>,

    /// Captured output after any line filtering (empty in test mode)
    pub output: String,
}

/// Full run report across all groups
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// All candidate changed files, deduplicated
    pub changed_files: Vec<String>,

    /// Per-group results, in registry order, skipped groups omitted
    pub groups: Vec<GroupReport>,
}
