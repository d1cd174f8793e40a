//! Line start table for offset to line/column conversion.
//!
//! Errors raised outside the scanner (which tracks positions incrementally)
//! only know a byte offset. [`LineTable`] turns that offset into a 0-based
//! line and a 0-based column counted in characters, and hands out the text
//! of individual lines for excerpt rendering.

/// Byte offsets of every line start in a source text.
///
/// `starts[0]` is always 0; each following entry is the byte after a `\n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineTable {
    starts: Vec<usize>,
}

impl LineTable {
    /// Scan `source` once and record where each line begins.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineTable { starts }
    }

    /// 0-based line containing `offset`.
    #[inline]
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// 0-based `(line, column)` for `offset`, with the column counted in
    /// characters from the start of the line.
    pub fn line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        let start = self.starts.get(line).copied().unwrap_or(0);
        let end = offset.min(source.len());
        let column = source
            .get(start..end)
            .map_or(end.saturating_sub(start), |text| text.chars().count());
        (line, column)
    }

    /// Byte offset at which a 0-based line begins.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.starts.get(line).copied()
    }

    /// Text of a 0-based line, without its terminating newline.
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next - 1);
        source.get(start..end)
    }

    /// Number of lines, counting the empty segment after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Index of the last line that holds content.
    ///
    /// A trailing newline terminates the final line rather than starting a
    /// new one, so the empty segment after it is not counted.
    pub fn last_content_line(&self, source: &str) -> usize {
        let last = self.starts.len() - 1;
        if last > 0 && self.starts[last] >= source.len() {
            last - 1
        } else {
            last
        }
    }
}
