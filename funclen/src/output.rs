//! Report printing (flake8-style text and JSON).

use anyhow::Result;
use colored::Colorize;

use crate::analyzer::AnalysisResult;
use crate::utils::normalize_display_path;

/// Prints one line per finding: `path:line:col: MFL000 message`.
pub fn print_report(result: &AnalysisResult) {
    for finding in &result.findings {
        println!(
            "{}:{}:{}: {} {}",
            normalize_display_path(&finding.file).bold(),
            finding.line,
            finding.col,
            finding.rule_id.yellow(),
            finding.message
        );
    }
}

/// Prints read/parse failures to stderr.
pub fn print_parse_errors(result: &AnalysisResult) {
    for parse_error in &result.parse_errors {
        eprintln!(
            "{}: {}: {}",
            "error".red().bold(),
            normalize_display_path(&parse_error.file),
            parse_error.error
        );
    }
}

/// Prints the whole result as pretty JSON.
pub fn print_report_json(result: &AnalysisResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
