//! Command line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.funclen.toml or pyproject.toml [tool.funclen]):
  Create this file in your project root to set defaults.
  Command-line flags override the file values.

  [funclen]
  max_length = 50                      # Maximum allowed function length
  include_function_definition = false  # Count the def/signature line(s)
  include_docstring = false            # Count a leading docstring
  include_empty_lines = false          # Count blank lines
  include_comment_lines = false        # Count full-line comments
  exclude_folders = [\"build\", \"dist\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "funclen - Flags Python functions that exceed a configurable line count",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Paths to analyze (files or directories).
    /// Can be a single directory, multiple files, or a mix of both.
    /// When no paths are provided, defaults to the current directory.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Maximum allowed function length. (Default: 50)
    #[arg(long, value_name = "n")]
    pub max_function_length: Option<usize>,

    /// Include the function definition line(s) when calculating the
    /// function length. (Default: disabled)
    #[arg(long)]
    pub include_function_definition: bool,

    /// Include the length of the docstring when calculating the function
    /// length. (Default: disabled)
    #[arg(long)]
    pub include_docstring: bool,

    /// Include empty lines inside the function when calculating the
    /// function length. (Default: disabled)
    #[arg(long)]
    pub include_empty_lines: bool,

    /// Include comment lines when calculating the function length.
    /// (Default: disabled)
    #[arg(long)]
    pub include_comment_lines: bool,

    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Folders to exclude from analysis.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,
}
