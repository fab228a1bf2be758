//! Line classification: turning a line span into a measured length.

use ruff_python_ast::token::Token;
use ruff_text_size::Ranged;
use rustc_hash::FxHashSet;

use super::bounds::LineRange;
use crate::utils::LineIndex;

/// Counts the lines of `range`, subtracting blank and comment-only lines
/// unless they are configured to be included.
///
/// Classification is line-based: a source line carrying several tokens
/// (say a comment plus its newline) is counted once. Blank lines and
/// comment lines are classified independently from the same token subset,
/// so the order of the two passes cannot influence the result. The two
/// sets are disjoint (a stripped line cannot be both empty and start with
/// `#`), hence the subtraction never underflows.
#[must_use]
pub fn count_lines(
    tokens: &[Token],
    source: &str,
    line_index: &LineIndex,
    range: LineRange,
    include_empty_lines: bool,
    include_comment_lines: bool,
) -> usize {
    if range.is_empty() {
        return 0;
    }

    let mut length = range.end - range.start + 1;

    if !include_empty_lines {
        length -= classify_lines(tokens, source, line_index, range, str::is_empty);
    }

    if !include_comment_lines {
        length -= classify_lines(tokens, source, line_index, range, |text| {
            text.starts_with('#')
        });
    }

    length
}

/// Counts the distinct lines within `range` whose stripped raw text
/// satisfies `matches`. Only lines on which a token starts are considered,
/// mirroring a tokenizer's view of the file: the interior lines of a
/// multi-line string start no token and are therefore never reclassified.
fn classify_lines(
    tokens: &[Token],
    source: &str,
    line_index: &LineIndex,
    range: LineRange,
    matches: impl Fn(&str) -> bool,
) -> usize {
    let mut lines: FxHashSet<usize> = FxHashSet::default();
    for token in tokens {
        let line = line_index.line_index(token.range().start());
        if line < range.start || line > range.end {
            continue;
        }
        if matches(line_index.line_text(source, line).trim()) {
            lines.insert(line);
        }
    }
    lines.len()
}
