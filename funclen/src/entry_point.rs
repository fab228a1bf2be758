//! Shared entry point wiring the CLI, configuration and analyzer together.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::analyzer::Analyzer;
use crate::cli::Cli;
use crate::config::Config;
use crate::output;
use crate::settings::LengthSettings;

/// Parses `args` (without the program name) and runs the checker.
///
/// Returns the process exit code: 0 for a clean run, 1 when findings or
/// parse errors were reported, 2 for usage errors.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    let cli = match Cli::try_parse_from(std::iter::once("funclen".to_owned()).chain(args)) {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() { 2 } else { 0 });
        }
    };
    run(&cli)
}

/// Runs the checker for an already-parsed CLI invocation.
pub fn run(cli: &Cli) -> Result<i32> {
    let config_anchor = cli
        .paths
        .first()
        .map_or(Path::new("."), std::path::PathBuf::as_path);
    let config = Config::load_from_path(config_anchor);

    // Startup validation: an invalid max length fails the run before any
    // file is touched.
    let settings = LengthSettings::resolve(cli, &config)?;

    let mut exclude_folders = config.funclen.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders.iter().cloned());

    let analyzer = Analyzer::new(settings).with_exclude_folders(exclude_folders);
    let result = analyzer.analyze(&cli.paths);

    if cli.json {
        output::print_report_json(&result)?;
    } else {
        output::print_report(&result);
        output::print_parse_errors(&result);
    }

    Ok(i32::from(
        !result.findings.is_empty() || !result.parse_errors.is_empty(),
    ))
}
