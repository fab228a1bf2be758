use ruff_text_size::TextSize;

/// A utility struct to convert byte offsets to line numbers and line text.
///
/// The AST and the token stream work with byte offsets, but length
/// measurement and reporting are line-oriented.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed column number.
    #[must_use]
    pub fn column_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(_) => 1,
            Err(line) => offset - self.line_starts.get(line - 1).copied().unwrap_or(0) + 1,
        }
    }

    /// Returns the raw text of a 1-indexed line, without its trailing newline.
    ///
    /// Out-of-range line numbers resolve to the empty string.
    #[must_use]
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> &'a str {
        let Some(start) = line
            .checked_sub(1)
            .and_then(|i| self.line_starts.get(i).copied())
        else {
            return "";
        };
        let end = self.line_starts.get(line).copied().unwrap_or(source.len());
        source
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r'])
    }

}

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}
