//! The EJS compiler: verbatim text passes through, imports are expanded.
//!
//! Import graphs may be cyclic or diamond-shaped. A resource is marked
//! visited before its content is expanded, and an import of a visited
//! resource is skipped, so every resource is written at most once per
//! [`Context`] and recursion always terminates.

use std::io::Write;
use std::path::Path;

use slang_lexer::{Scanner, Token};

use crate::{compile_file, fetch, CompileError, Context, ContextOptions, Resource};

pub(crate) fn compile(
    cx: &mut Context,
    input_path: &Path,
    source: &str,
    output: &mut dyn Write,
) -> Result<(), CompileError> {
    // The file being compiled counts as emitted, so an import cycle back
    // to it stops here instead of writing it a second time.
    cx.add_visited(Resource::local(input_path)?);

    let mut scanner = Scanner::new(input_path.display().to_string(), source);
    loop {
        for token in scanner.next_tokens()? {
            match token {
                Token::Verbatim(text) => output.write_all(text.as_bytes())?,
                Token::Import(reference) => import(cx, input_path, &reference, output)?,
                Token::EndOfInput => return Ok(()),
            }
        }
    }
}

fn import(
    cx: &mut Context,
    importer: &Path,
    reference: &str,
    output: &mut dyn Write,
) -> Result<(), CompileError> {
    let wrap = |source: CompileError| CompileError::Import {
        resource: reference.to_string(),
        via: importer.to_path_buf(),
        source: Box::new(source),
    };

    let resource = Resource::resolve(reference, importer).map_err(|err| wrap(err.into()))?;
    if !cx.add_visited(resource.clone()) {
        if cx.options().contains(ContextOptions::VERBOSE) {
            tracing::info!(
                %resource,
                via = %importer.display(),
                "skipping already-imported resource"
            );
        } else {
            tracing::debug!(
                %resource,
                via = %importer.display(),
                "skipping already-imported resource"
            );
        }
        return Ok(());
    }

    if cx.options().contains(ContextOptions::ANNOTATE_IMPORTS) {
        writeln!(output, "/* #import {reference:?} */")?;
    }

    match &resource {
        Resource::Remote(url) => fetch::copy_remote(cx, url, output),
        Resource::Local(path) => compile_file(cx, path, output),
    }
    .map_err(wrap)
}
