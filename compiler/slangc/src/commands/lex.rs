//! `slang lex`: dump the import scanner's token stream.

use std::fs;
use std::io::Write;
use std::path::Path;

use slang_lexer::Scanner;

use crate::Error;

/// Scan `path` and write its tokens to `out`, one per line.
pub fn lex_file(path: &Path, out: &mut dyn Write) -> Result<(), Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let resource = path.display().to_string();
    let tokens = Scanner::tokenize(&resource, &source)?;

    let write_error = |source| Error::Write {
        path: "<stdout>".into(),
        source,
    };
    writeln!(out, "Tokens for '{resource}' ({} tokens):", tokens.len()).map_err(write_error)?;
    for token in &tokens {
        writeln!(out, "  {token}").map_err(write_error)?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prints_one_token_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ejs");
        fs::write(&path, "a();\n#import \"b.js\"\n").unwrap();

        let mut out = Vec::new();
        lex_file(&path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec![
                "  verbatim \"a();\\n\"",
                "  import \"b.js\"",
                "  verbatim \"\\n\"",
                "  end of input",
            ]
        );
    }

    #[test]
    fn syntax_errors_surface() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ejs");
        fs::write(&path, "#bogus\n").unwrap();

        let err = lex_file(&path, &mut Vec::new()).unwrap_err();
        let Error::Syntax(source) = &err else {
            panic!("expected a syntax error, got {err:?}");
        };
        assert_eq!(source.message(), "no such directive 'bogus'");
    }
}
