//! Character cursor with incremental position tracking.
//!
//! Advances one code point at a time, stepping the byte offset by the
//! code point's UTF-8 width. A newline moves to column 0 of the next line;
//! any other character advances the column by one.

use slang_diagnostic::Position;

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    position: Position,
    prev: Option<char>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            position: Position::START,
            prev: None,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// The most recently consumed character, `None` at start of input.
    #[inline]
    pub fn prev(&self) -> Option<char> {
        self.prev
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.position.offset..].chars().next()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.prev = Some(c);
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut pred) {
            self.bump();
        }
    }

    /// Source text between two byte offsets previously reported by this cursor.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }
}
