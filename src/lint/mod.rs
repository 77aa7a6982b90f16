//! Linter groups: routing, invocation and output filtering.
//!
//! A linter group owns one tool and a set of file-extension suffixes.
//! The registry defines the four configured groups (Ruby, JavaScript,
//! ERB templates, stylesheets); the runner routes changed files to each
//! group and shells out to the tool; the filter restricts output to
//! changed lines in lines-only mode.

pub mod filter;
pub mod registry;
pub mod runner;
pub mod types;

pub use filter::{diagnostic_line_number, filter_output};
pub use registry::{group_by_tag, registry, route, validate_filter};
pub use runner::run_checks;
pub use types::{GroupReport, LinterKind, LinterSpec, RunReport};
