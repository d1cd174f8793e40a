//! Located errors in a source text, with excerpt rendering.
//!
//! A [`SourceError`] carries the full text it was raised against so that
//! the same value can be rendered as a terminal excerpt (caret under the
//! offending character) or as an HTML excerpt (offending character wrapped
//! in markup supplied by the caller).

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::line_table::LineTable;

/// A point in a source text.
///
/// `line` and `column` are 0-based; `column` counts characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };
}

/// How the erroring line is marked in an excerpt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// Follow the erroring line with a line holding a `^` under the column.
    Caret,
    /// Wrap the character at the column in `prefix`/`suffix`.
    ///
    /// The markers are never passed through the escape function.
    Markers { prefix: &'a str, suffix: &'a str },
}

/// An error at a specific location in a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceError {
    message: String,
    resource: String,
    text: Arc<str>,
    position: Position,
}

impl SourceError {
    /// Create an error at a position the caller already tracks.
    pub fn new(
        resource: impl Into<String>,
        text: Arc<str>,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        SourceError {
            message: message.into(),
            resource: resource.into(),
            text,
            position,
        }
    }

    /// Create an error from a byte offset, deriving line and column.
    pub fn at_offset(
        resource: impl Into<String>,
        text: Arc<str>,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        let (line, column) = LineTable::build(&text).line_col(&text, offset);
        let position = Position {
            offset,
            line,
            column,
        };
        SourceError::new(resource, text, position, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// `<resource>:<line>:<column>`, 1-based for display.
    pub fn location(&self) -> String {
        format!(
            "{}:{}:{}",
            self.resource,
            self.position.line + 1,
            self.position.column + 1
        )
    }

    /// Plain-text excerpt with a caret line, joined with newlines.
    pub fn excerpt(&self, context: usize) -> String {
        self.excerpt_lines(Annotation::Caret, context, str::to_owned)
            .join("\n")
    }

    /// Up to `2 * context + 1` lines centred on the error line.
    ///
    /// `escape` is applied to every piece of source text (and the caret
    /// line) but never to the markers of [`Annotation::Markers`]. Returns
    /// no lines when the error line does not exist in the source.
    pub fn excerpt_lines<F>(
        &self,
        annotation: Annotation<'_>,
        context: usize,
        escape: F,
    ) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        let table = LineTable::build(&self.text);
        let target = self.position.line;
        if target >= table.line_count() {
            return Vec::new();
        }

        let first = target.saturating_sub(context);
        let last = (target + context).min(table.last_content_line(&self.text).max(target));

        let mut lines = Vec::with_capacity(last - first + 2);
        for index in first..=last {
            let Some(text) = table.line_text(&self.text, index) else {
                return Vec::new();
            };
            if index != target {
                lines.push(escape(text));
                continue;
            }
            match annotation {
                Annotation::Caret => {
                    lines.push(escape(text));
                    let mut pointer = " ".repeat(self.position.column);
                    pointer.push('^');
                    lines.push(escape(&pointer));
                }
                Annotation::Markers { prefix, suffix } => {
                    let column = self.position.column;
                    lines.push(wrap_column(text, column, prefix, suffix, &escape));
                }
            }
        }
        lines
    }
}

/// Wrap the character at `column` in markers, escaping the text around them.
fn wrap_column<F>(line: &str, column: usize, prefix: &str, suffix: &str, escape: &F) -> String
where
    F: Fn(&str) -> String,
{
    let split = |n: usize| line.char_indices().nth(n).map_or(line.len(), |(i, _)| i);
    let at = split(column);
    let after = split(column + 1);

    let mut out = escape(&line[..at]);
    out.push_str(prefix);
    out.push_str(&escape(&line[at..after]));
    out.push_str(suffix);
    out.push_str(&escape(&line[after..]));
    out
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\n{}", self.location(), self.message, self.excerpt(0))
    }
}

impl Error for SourceError {}

#[cfg(test)]
mod tests;
