//! Analysis engine: walks paths, parses Python files, runs the checker.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ruff_python_parser::parse_module;
use serde::Serialize;

use crate::checker::{self, Context, Finding};
use crate::settings::LengthSettings;
use crate::utils::LineIndex;

/// Folders that are never worth descending into.
const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &[
    ".git",
    ".tox",
    ".venv",
    "venv",
    "__pycache__",
    ".eggs",
    "build",
    "dist",
    "node_modules",
];

/// A file that could not be read or parsed.
#[derive(Debug, Clone, Serialize)]
pub struct ParseError {
    /// File that failed.
    pub file: PathBuf,
    /// Human-readable failure description.
    pub error: String,
}

/// Accumulated result of one analysis run.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResult {
    /// Overlong-function findings across all analyzed files.
    pub findings: Vec<Finding>,
    /// Files that failed to read or parse.
    pub parse_errors: Vec<ParseError>,
    /// Number of files successfully analyzed.
    pub files_analyzed: usize,
}

/// Analyzer state: resolved settings plus path filters.
#[derive(Debug, Default)]
pub struct Analyzer {
    /// Resolved length-check settings, immutable for the whole run.
    pub settings: LengthSettings,
    /// Folders to exclude from directory walks, on top of the defaults.
    pub exclude_folders: Vec<String>,
}

impl Analyzer {
    /// Creates an analyzer with the given settings.
    #[must_use]
    pub fn new(settings: LengthSettings) -> Self {
        Self {
            settings,
            exclude_folders: Vec::new(),
        }
    }

    /// Adds user-configured folder exclusions.
    #[must_use]
    pub fn with_exclude_folders(mut self, folders: Vec<String>) -> Self {
        self.exclude_folders = folders;
        self
    }

    /// Analyzes the given paths. Explicit files are processed directly;
    /// directories are walked for `*.py` files.
    ///
    /// A file that fails to read or parse becomes a `ParseError` entry and
    /// never aborts the run.
    #[must_use]
    pub fn analyze(&self, paths: &[PathBuf]) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        for path in paths {
            if path.is_file() {
                self.process_file(path, &mut result);
            } else {
                for file in find_python_files(path, &self.exclude_folders) {
                    self.process_file(&file, &mut result);
                }
            }
        }
        result
    }

    fn process_file(&self, file: &Path, result: &mut AnalysisResult) {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                result.parse_errors.push(ParseError {
                    file: file.to_path_buf(),
                    error: format!("Failed to read file: {e}"),
                });
                return;
            }
        };

        let line_index = LineIndex::new(&source);
        match parse_module(&source) {
            Ok(parsed) => {
                let context = Context {
                    file,
                    source: &source,
                    tokens: parsed.tokens(),
                    line_index: &line_index,
                    settings: &self.settings,
                };
                result
                    .findings
                    .extend(checker::check_module(parsed.syntax(), &context));
                result.files_analyzed += 1;
            }
            Err(e) => {
                result.parse_errors.push(ParseError {
                    file: file.to_path_buf(),
                    error: format!("Failed to parse file: {e}"),
                });
            }
        }
    }
}

/// Collects the `*.py` files under `root`, pruning excluded directories.
/// The list is sorted so reports come out in a deterministic order.
fn find_python_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let exclude = exclude.to_vec();
    let mut files: Vec<PathBuf> = WalkBuilder::new(root)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                let name = entry.file_name().to_string_lossy();
                return !DEFAULT_EXCLUDE_FOLDERS.contains(&name.as_ref())
                    && !exclude.iter().any(|ex| name == ex.as_str());
            }
            true
        })
        .build()
        .filter_map(Result::ok)
        .filter(|entry| {
            let path = entry.path();
            path.is_file() && path.extension().is_some_and(|ext| ext == "py")
        })
        .map(ignore::DirEntry::into_path)
        .collect();
    files.sort();
    files
}
