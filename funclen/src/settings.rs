use std::fmt;

use crate::cli::Cli;
use crate::config::Config;

/// Default maximum allowed function length.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Resolved length-check options, shared read-only by every function
/// evaluation in a run.
///
/// Resolution happens once at startup: a CLI value wins over a config-file
/// value, which wins over the default. The four inclusion toggles are
/// independent; each defaults to excluding its line category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSettings {
    /// Maximum allowed function length (>= 1).
    pub max_length: usize,
    /// Count the signature line(s) of the function.
    pub include_function_definition: bool,
    /// Count a leading docstring.
    pub include_docstring: bool,
    /// Count blank lines inside the function.
    pub include_empty_lines: bool,
    /// Count full-line comments inside the function.
    pub include_comment_lines: bool,
}

impl Default for LengthSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            include_function_definition: false,
            include_docstring: false,
            include_empty_lines: false,
            include_comment_lines: false,
        }
    }
}

/// Errors emitted while resolving settings, before any file is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The configured maximum length is below 1.
    InvalidMaxLength(usize),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidMaxLength(value) => {
                write!(f, "max function length must be at least 1, got {value}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl LengthSettings {
    /// Resolves the final settings from CLI flags and the loaded config.
    ///
    /// Boolean flags are sticky: either source can enable a toggle, and the
    /// CLI cannot un-set a toggle enabled in the config file.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let file = &config.funclen;

        let max_length = cli
            .max_function_length
            .or(file.max_length)
            .unwrap_or(defaults.max_length);
        if max_length < 1 {
            return Err(SettingsError::InvalidMaxLength(max_length));
        }

        Ok(Self {
            max_length,
            include_function_definition: cli.include_function_definition
                || file.include_function_definition.unwrap_or(false),
            include_docstring: cli.include_docstring || file.include_docstring.unwrap_or(false),
            include_empty_lines: cli.include_empty_lines
                || file.include_empty_lines.unwrap_or(false),
            include_comment_lines: cli.include_comment_lines
                || file.include_comment_lines.unwrap_or(false),
        })
    }
}
