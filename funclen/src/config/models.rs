use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for funclen.
    pub funclen: FunclenConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for funclen.
pub struct FunclenConfig {
    /// Maximum allowed function length.
    #[serde(alias = "max-function-length", alias = "max_function_length")]
    pub max_length: Option<usize>,
    /// Count the function's signature line(s).
    #[serde(alias = "include-function-definition")]
    pub include_function_definition: Option<bool>,
    /// Count a leading docstring.
    #[serde(alias = "include-docstring")]
    pub include_docstring: Option<bool>,
    /// Count blank lines inside functions.
    #[serde(alias = "include-empty-lines")]
    pub include_empty_lines: Option<bool>,
    /// Count full-line comments inside functions.
    #[serde(alias = "include-comment-lines")]
    pub include_comment_lines: Option<bool>,
    /// List of folders to exclude from analysis.
    #[serde(alias = "exclude-folders")]
    pub exclude_folders: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct PyProject {
    pub(super) tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct ToolConfig {
    pub(super) funclen: FunclenConfig,
}
