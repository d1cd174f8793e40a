use std::fmt;

/// One unit of EJS source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'src> {
    /// Text copied to the output unchanged.
    Verbatim(&'src str),
    /// `#import "<resource>"`, holding the decoded resource reference.
    Import(String),
    EndOfInput,
}

impl Token<'_> {
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Verbatim(text) => write!(f, "verbatim \"{}\"", text.escape_debug()),
            Token::Import(resource) => write!(f, "import \"{}\"", resource.escape_debug()),
            Token::EndOfInput => f.write_str("end of input"),
        }
    }
}
