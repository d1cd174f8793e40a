//! The EJS scanner.
//!
//! Two states: scanning verbatim text, and scanning a directive. The
//! directive delimiter `#` only opens a directive as the first character
//! of the input or directly after a newline; anywhere else it is text.
//!
//! Each call to [`Scanner::next_tokens`] yields one token, or a verbatim
//! token followed by the directive (or end of input) that terminated it.

mod escape;

use std::sync::Arc;

use slang_diagnostic::{Position, SourceError};
use smallvec::{smallvec, SmallVec};

use crate::{Cursor, Token};

/// Opens a directive at the start of a line.
pub const DELIMITER: char = '#';

const QUOTE: char = '"';

/// One batch of tokens: at most a verbatim run and its terminator.
pub type Tokens<'src> = SmallVec<[Token<'src>; 2]>;

pub struct Scanner<'src> {
    resource: String,
    cursor: Cursor<'src>,
    done: bool,
}

impl<'src> Scanner<'src> {
    /// `resource` names the source in error locations.
    pub fn new(resource: impl Into<String>, source: &'src str) -> Self {
        Scanner {
            resource: resource.into(),
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Scan a whole source, including the final [`Token::EndOfInput`].
    pub fn tokenize(resource: &str, source: &'src str) -> Result<Vec<Token<'src>>, SourceError> {
        let mut scanner = Scanner::new(resource, source);
        let mut tokens = Vec::new();
        loop {
            let batch = scanner.next_tokens()?;
            let end = batch.last().is_some_and(Token::is_end);
            tokens.extend(batch);
            if end {
                return Ok(tokens);
            }
        }
    }

    /// Produce the next batch of tokens.
    ///
    /// Once end of input has been returned, later calls keep returning
    /// [`Token::EndOfInput`].
    pub fn next_tokens(&mut self) -> Result<Tokens<'src>, SourceError> {
        if self.done {
            return Ok(smallvec![Token::EndOfInput]);
        }

        let start = self.cursor.offset();
        loop {
            let at = self.cursor.offset();
            let line_start = matches!(self.cursor.prev(), None | Some('\n'));

            let Some(c) = self.cursor.bump() else {
                self.done = true;
                return Ok(self.flush(start, at, Token::EndOfInput));
            };

            if c == DELIMITER && line_start {
                let directive = self.directive()?;
                return Ok(self.flush(start, at, directive));
            }
        }
    }

    /// Pending verbatim text in `start..end` (if any) followed by `token`.
    fn flush(&self, start: usize, end: usize, token: Token<'src>) -> Tokens<'src> {
        let mut tokens = Tokens::new();
        if end > start {
            tokens.push(Token::Verbatim(self.cursor.slice(start, end)));
        }
        tokens.push(token);
        tokens
    }

    fn directive(&mut self) -> Result<Token<'src>, SourceError> {
        self.skip_white();
        let start = self.cursor.offset();
        self.cursor
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let name = self.cursor.slice(start, self.cursor.offset());

        match name {
            "" => Err(self.error(format!(
                "expected identifier after directive delimiter '{DELIMITER}'"
            ))),
            "import" => self.import(),
            other => Err(self.error(format!("no such directive '{other}'"))),
        }
    }

    fn import(&mut self) -> Result<Token<'src>, SourceError> {
        let after_keyword = self.cursor.position();
        self.skip_white();
        if self.cursor.peek() != Some(QUOTE) {
            return Err(self.error_at(after_keyword, "expected quoted string after 'import'"));
        }
        self.cursor.bump();
        let resource = self.string_body(QUOTE)?;
        Ok(Token::Import(resource))
    }

    /// Decode a string whose opening quote has been consumed.
    fn string_body(&mut self, quote: char) -> Result<String, SourceError> {
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                Some(c) if c == quote => return Ok(text),
                None | Some('\n') => return Err(self.error("string is not terminated")),
                Some('\\') => text.push(self.escape(quote)?),
                Some(c) => text.push(c),
            }
        }
    }

    /// Skip control characters and spaces, newlines included.
    fn skip_white(&mut self) {
        self.cursor.eat_while(|c| c <= ' ');
    }

    fn error(&self, message: impl Into<String>) -> SourceError {
        self.error_at(self.cursor.position(), message)
    }

    fn error_at(&self, position: Position, message: impl Into<String>) -> SourceError {
        SourceError::new(
            self.resource.clone(),
            Arc::from(self.cursor.source()),
            position,
            message,
        )
    }
}
