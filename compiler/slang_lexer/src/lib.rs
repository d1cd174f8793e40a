//! Scanner for the slang extended script (EJS) format.
//!
//! EJS is plain text with one directive: a line beginning with
//! `#import "<resource>"` is replaced, at compile time, by the content of
//! the referenced resource. The scanner splits a source into verbatim runs
//! and import directives; everything else about the file is opaque.
//!
//! ```
//! use slang_lexer::{Scanner, Token};
//!
//! let tokens = Scanner::tokenize("app.ejs", "#import \"lib.js\"\nmain();\n").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Import("lib.js".to_string()),
//!         Token::Verbatim("\nmain();\n"),
//!         Token::EndOfInput,
//!     ]
//! );
//! ```

mod cursor;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use scanner::{Scanner, Tokens, DELIMITER};
pub use token::Token;
