//! Boundary resolution: which lines of a function are measured.

use ruff_python_ast::{Expr, Stmt, StmtFunctionDef};
use ruff_text_size::Ranged;

use crate::utils::LineIndex;

/// An inclusive, 1-indexed span of source lines.
///
/// `start > end` is a valid state and means the function contributes zero
/// lines (e.g. a docstring-only body with the docstring excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First measured line.
    pub start: usize,
    /// Last measured line.
    pub end: usize,
}

impl LineRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns `true` when the range spans no lines at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Computes the line span over which `func`'s length is measured.
///
/// The span always starts from the `def` line, never from decorators: the
/// ruff AST ranges a `StmtFunctionDef` from its first decorator, so the
/// definition line is derived from the name token instead (the name shares
/// the `def` keyword's line).
///
/// With `include_definition` disabled the span starts at the first body
/// statement, excluding the signature line(s) entirely, even when the
/// parameter list spans several lines. With `include_docstring` disabled a
/// leading docstring is skipped: for a docstring-only body the span ends
/// just before the docstring (which may leave `start > end`), otherwise it
/// starts just after the docstring's last line.
#[must_use]
pub fn resolve_bounds(
    func: &StmtFunctionDef,
    line_index: &LineIndex,
    include_definition: bool,
    include_docstring: bool,
) -> LineRange {
    let def_line = line_index.line_index(func.name.range().start());
    let mut start = def_line;
    let mut end = line_index.line_index(func.range().end());

    let Some(first) = func.body.first() else {
        // A function without body statements cannot be parsed from valid
        // source; resolve to an empty span instead of assuming otherwise.
        return LineRange::new(def_line, def_line.saturating_sub(1));
    };

    if !include_definition {
        start = line_index.line_index(first.range().start());
    }

    if !include_docstring {
        if let Some(doc) = docstring(&func.body) {
            if func.body.len() == 1 {
                // Docstring-only body: move the end just before the
                // docstring. `start` stays put so the definition line still
                // counts when it is included.
                end = line_index.line_index(doc.range().start()).saturating_sub(1);
            } else {
                // Skip past the (possibly multi-line) docstring.
                start = line_index.line_index(doc.range().end()) + 1;
            }
        }
    }

    LineRange::new(start, end)
}

/// Returns the leading docstring statement, if any.
///
/// A docstring is the first body statement when it is an expression
/// statement wrapping a plain string literal. The check is structural;
/// f-strings and bytes literals are not docstrings.
#[must_use]
pub fn docstring(body: &[Stmt]) -> Option<&Stmt> {
    match body.first() {
        Some(stmt @ Stmt::Expr(expr)) if matches!(*expr.value, Expr::StringLiteral(_)) => {
            Some(stmt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use ruff_python_ast::ModModule;
    use ruff_python_parser::parse_module;

    fn first_function(module: &ModModule) -> &StmtFunctionDef {
        module
            .body
            .iter()
            .find_map(|stmt| match stmt {
                Stmt::FunctionDef(func) => Some(func),
                _ => None,
            })
            .unwrap()
    }

    fn bounds(source: &str, include_definition: bool, include_docstring: bool) -> LineRange {
        let parsed = parse_module(source).unwrap();
        let line_index = LineIndex::new(source);
        resolve_bounds(
            first_function(parsed.syntax()),
            &line_index,
            include_definition,
            include_docstring,
        )
    }

    #[test]
    fn body_only_by_default() {
        let source = "def f():\n    a = 1\n    return a\n";
        assert_eq!(bounds(source, false, false), LineRange::new(2, 3));
    }

    #[test]
    fn definition_line_included_on_request() {
        let source = "def f():\n    a = 1\n    return a\n";
        assert_eq!(bounds(source, true, false), LineRange::new(1, 3));
    }

    #[test]
    fn multi_line_signature_starts_at_def_line() {
        let source = "def f(\n    a,\n    b,\n):\n    return a + b\n";
        assert_eq!(bounds(source, true, false), LineRange::new(1, 5));
        assert_eq!(bounds(source, false, false), LineRange::new(5, 5));
    }

    #[test]
    fn decorators_never_count_as_definition() {
        let source = "@wraps(g)\n@cached\ndef f():\n    return 1\n";
        assert_eq!(bounds(source, true, false), LineRange::new(3, 4));
    }

    #[test]
    fn docstring_only_body_is_empty_range() {
        let source = "def f():\n    \"docs\"\n";
        let range = bounds(source, false, false);
        assert!(range.is_empty());
    }

    #[test]
    fn docstring_only_body_keeps_definition_line() {
        let source = "def f():\n    \"docs\"\n";
        assert_eq!(bounds(source, true, false), LineRange::new(1, 1));
    }

    #[test]
    fn multi_line_docstring_skipped_entirely() {
        let source = "def f():\n    \"\"\"one\n    two\n    three\"\"\"\n    return 1\n";
        assert_eq!(bounds(source, false, false), LineRange::new(5, 5));
    }

    #[test]
    fn docstring_counted_when_included() {
        let source = "def f():\n    \"docs\"\n    return 1\n";
        assert_eq!(bounds(source, false, true), LineRange::new(2, 3));
    }

    #[test]
    fn fstring_is_not_a_docstring() {
        let source = "def f():\n    f\"not docs\"\n";
        assert_eq!(bounds(source, false, false), LineRange::new(2, 2));
    }

    #[test]
    fn async_functions_resolve_like_sync_ones() {
        let source = "async def f():\n    await g()\n";
        assert_eq!(bounds(source, false, false), LineRange::new(2, 2));
        assert_eq!(bounds(source, true, false), LineRange::new(1, 2));
    }
}
