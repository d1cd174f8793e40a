//! Backslash escapes inside quoted strings.
//!
//! `\a \b \f \n \r \t \v \\`, the quote character, octal `\N`..`\NNN`,
//! `\xNN`, `\uNNNN` and `\UNNNNNNNN`. Hex forms take exactly the stated
//! number of digits.

use slang_diagnostic::SourceError;

use super::Scanner;

impl Scanner<'_> {
    /// Decode one escape whose backslash has been consumed.
    pub(super) fn escape(&mut self, quote: char) -> Result<char, SourceError> {
        let Some(c) = self.cursor.bump() else {
            return Err(self.error("string is not terminated"));
        };
        let decoded = match c {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            '\\' => '\\',
            c if c == quote => quote,
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match self.cursor.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            self.cursor.bump();
                            value = value * 8 + digit;
                        }
                        None => break,
                    }
                }
                self.code_point(value)?
            }
            'x' => self.hex_escape(2)?,
            'u' => self.hex_escape(4)?,
            'U' => self.hex_escape(8)?,
            other => return Err(self.error(format!("invalid escape sequence '\\{other}'"))),
        };
        Ok(decoded)
    }

    fn hex_escape(&mut self, digits: usize) -> Result<char, SourceError> {
        let mut value: u32 = 0;
        for _ in 0..digits {
            let Some(digit) = self.cursor.peek().and_then(|d| d.to_digit(16)) else {
                return Err(self.error(format!(
                    "escape sequence requires {digits} hexadecimal digits"
                )));
            };
            self.cursor.bump();
            value = value * 16 + digit;
        }
        self.code_point(value)
    }

    fn code_point(&self, value: u32) -> Result<char, SourceError> {
        char::from_u32(value).ok_or_else(|| {
            self.error(format!("escape value {value:#x} is not a valid code point"))
        })
    }
}
