//! Linter group registry and extension routing
//!
//! The four groups are defined statically: Ruby, JavaScript, ERB templates
//! and stylesheets. Each descriptor carries its binary, base options,
//! auto-correct flag, install command and owned extension suffixes.

use crate::error::{LintDiffError, Result};
use crate::lint::types::{LinterKind, LinterSpec};

/// Static registry of all configured linter groups
pub const REGISTRY: &[LinterSpec] = &[
    LinterSpec {
        kind: LinterKind::Rubocop,
        tag: "ruby",
        program: "rubocop",
        base_args: &["--format", "simple", "--force-exclusion"],
        fix_arg: Some("--autocorrect"),
        install_command: "gem install rubocop",
        suffixes: &["rb"],
    },
    LinterSpec {
        kind: LinterKind::Eslint,
        tag: "script",
        program: "eslint",
        base_args: &["--format", "unix"],
        fix_arg: Some("--fix"),
        install_command: "npm install -g eslint",
        suffixes: &["js"],
    },
    LinterSpec {
        kind: LinterKind::Erblint,
        tag: "template",
        program: "erblint",
        base_args: &[],
        fix_arg: Some("--autocorrect"),
        install_command: "gem install erb_lint",
        suffixes: &["erb"],
    },
    LinterSpec {
        kind: LinterKind::Stylelint,
        tag: "stylesheet",
        program: "stylelint",
        base_args: &[],
        fix_arg: Some("--fix"),
        install_command: "npm install -g stylelint",
        suffixes: &["scss", "sass", "css"],
    },
];

/// Get the full group registry
pub fn registry() -> &'static [LinterSpec] {
    REGISTRY
}

/// Look up a group by its tag
pub fn group_by_tag(tag: &str) -> Option<&'static LinterSpec> {
    REGISTRY.iter().find(|spec| spec.tag == tag)
}

/// Validate a `--type` filter value against the registry
pub fn validate_filter(tag: &str) -> Result<()> {
    if group_by_tag(tag).is_some() {
        Ok(())
    } else {
        Err(LintDiffError::UnknownGroup {
            tag: tag.to_string(),
        })
    }
}

/// Route candidate files to one group: the subset whose path ends in one
/// of the group's configured suffixes.
pub fn route<'a>(spec: &LinterSpec, candidates: &'a [String]) -> Vec<&'a str> {
    candidates
        .iter()
        .filter(|path| spec.matches(path))
        .map(|path| path.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec![
            "app/models/user.rb".to_string(),
            "app/assets/site.scss".to_string(),
            "app/views/show.html.erb".to_string(),
            "app/js/widget.js".to_string(),
            "README.md".to_string(),
            "legacy.sass".to_string(),
        ]
    }

    #[test]
    fn test_ruby_routing() {
        let spec = group_by_tag("ruby").unwrap();
        assert_eq!(route(spec, &candidates()), ["app/models/user.rb"]);
    }

    #[test]
    fn test_stylesheet_routing_matches_multiple_suffixes() {
        let spec = group_by_tag("stylesheet").unwrap();
        assert_eq!(
            route(spec, &candidates()),
            ["app/assets/site.scss", "legacy.sass"]
        );
    }

    #[test]
    fn test_template_routing() {
        let spec = group_by_tag("template").unwrap();
        assert_eq!(route(spec, &candidates()), ["app/views/show.html.erb"]);
    }

    #[test]
    fn test_unmatched_file_routes_nowhere() {
        for spec in registry() {
            assert!(!spec.matches("README.md"));
        }
    }

    #[test]
    fn test_validate_filter() {
        assert!(validate_filter("ruby").is_ok());
        assert!(validate_filter("stylesheet").is_ok());
        assert!(validate_filter("python").is_err());
    }

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<_> = registry().iter().map(|s| s.tag).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), registry().len());
    }
}
