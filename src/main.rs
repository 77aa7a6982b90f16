//! lintdiff CLI entry point

use std::process::ExitCode;

use clap::Parser;

use lintdiff::cli::OutputFormat;
use lintdiff::{run_checks, Cli, Config};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> lintdiff::Result<String> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let report = run_checks(&config, None)?;

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                lintdiff::LintDiffError::OutputError {
                    message: format!("JSON serialization failed: {}", e),
                }
            })?;
            Ok(json + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for group in &report.groups {
                if config.test {
                    for command in &group.commands {
                        out.push_str(command);
                        out.push('\n');
                    }
                } else {
                    out.push_str(&group.output);
                }
            }
            Ok(out)
        }
    }
}
