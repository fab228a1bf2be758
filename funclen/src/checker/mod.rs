//! Core length checker: finds every function definition in a module and
//! measures it against the configured maximum.

mod bounds;
mod length;

pub use bounds::{docstring, resolve_bounds, LineRange};
pub use length::count_lines;

use std::path::{Path, PathBuf};

use ruff_python_ast::visitor::{walk_stmt, Visitor};
use ruff_python_ast::{ModModule, Stmt, StmtFunctionDef};
use ruff_python_ast::token::{Token, TokenKind};
use ruff_text_size::{Ranged, TextRange};
use serde::Serialize;

use crate::settings::LengthSettings;
use crate::utils::LineIndex;

/// Stable identifier reported with every finding.
pub const RULE_ID: &str = "MFL000";

/// A single overlong-function diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// ID of the rule that triggered the finding.
    pub rule_id: &'static str,
    /// Description of the issue, embedding measured and allowed length.
    pub message: String,
    /// File where the issue was found.
    pub file: PathBuf,
    /// 1-indexed line of the function's `def` keyword.
    pub line: usize,
    /// 1-indexed column of the function's `def` keyword.
    pub col: usize,
}

/// Context shared by every function evaluation within one file.
///
/// Everything in here is read-only for the duration of the file; the
/// settings are resolved once per run and passed down by reference.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Path of the file being checked.
    pub file: &'a Path,
    /// Full source text of the file.
    pub source: &'a str,
    /// Ordered token stream for the whole file, trivia included.
    pub tokens: &'a [Token],
    /// Line index for offset-to-line mapping.
    pub line_index: &'a LineIndex,
    /// Resolved length-check settings.
    pub settings: &'a LengthSettings,
}

/// Checks every function defined in `module`, however deeply nested, and
/// returns one finding per function whose measured length exceeds the
/// configured maximum.
#[must_use]
pub fn check_module(module: &ModModule, context: &Context) -> Vec<Finding> {
    let mut findings = Vec::new();
    for func in collect_functions(module) {
        let measured = function_length(func, context);
        if measured > context.settings.max_length {
            let position = def_keyword_range(func, context.tokens);
            findings.push(Finding {
                rule_id: RULE_ID,
                message: format!(
                    "Function too long ({measured} > {})",
                    context.settings.max_length
                ),
                file: context.file.to_path_buf(),
                line: context.line_index.line_index(position.start()),
                col: context.line_index.column_index(position.start()),
            });
        }
    }
    findings
}

/// Measures one function with the shared settings.
///
/// This is a pure function of the node, the token stream and the settings:
/// measuring the same triple twice yields the same length.
#[must_use]
pub fn function_length(func: &StmtFunctionDef, context: &Context) -> usize {
    let range = resolve_bounds(
        func,
        context.line_index,
        context.settings.include_function_definition,
        context.settings.include_docstring,
    );
    count_lines(
        context.tokens,
        context.source,
        context.line_index,
        range,
        context.settings.include_empty_lines,
        context.settings.include_comment_lines,
    )
}

/// Collects every function and coroutine-function definition in the module,
/// in source order, regardless of nesting depth.
#[must_use]
pub fn collect_functions(module: &ModModule) -> Vec<&StmtFunctionDef> {
    let mut collector = FunctionCollector::default();
    for stmt in &module.body {
        collector.visit_stmt(stmt);
    }
    collector.functions
}

#[derive(Default)]
struct FunctionCollector<'a> {
    functions: Vec<&'a StmtFunctionDef>,
}

impl<'a> Visitor<'a> for FunctionCollector<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        if let Stmt::FunctionDef(func) = stmt {
            self.functions.push(func);
        }
        walk_stmt(self, stmt);
    }
}

/// Locates the `def` keyword of `func` in the token stream.
///
/// The node's own range starts at the first decorator, which is the wrong
/// anchor for reporting; the `def` keyword is the closest `def` token
/// before the function's name. Falls back to the name token if the stream
/// does not cover the function (it always does for a freshly parsed file).
fn def_keyword_range(func: &StmtFunctionDef, tokens: &[Token]) -> TextRange {
    let name_start = func.name.range().start();
    let before_name = tokens.partition_point(|token| token.range().start() < name_start);
    tokens[..before_name]
        .iter()
        .rev()
        .take_while(|token| token.range().start() >= func.range().start())
        .find(|token| token.kind() == TokenKind::Def)
        .map_or_else(|| func.name.range(), |token| token.range())
}
