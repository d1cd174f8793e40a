//! Compilation pipeline for slang.
//!
//! A [`Compiler`] turns one input stream into one output stream. The
//! [`registry`] picks a compiler from a path's full extension
//! (`.min.scss` is not `.scss`), chaining stages where needed. The EJS
//! compiler expands `#import` directives recursively, sharing one
//! [`Context`] across the whole import graph so each resource is emitted
//! at most once.
//!
//! ```text
//! .scss      -> stylesheet
//! .min.scss  -> stylesheet (compressed)
//! .min.css   -> stylesheet (compressed)
//! .ejs       -> ejs
//! .min.ejs   -> ejs | minify
//! .min.js    -> minify
//! *          -> literal
//! ```

mod backend;
mod compiler;
mod context;
mod ejs;
mod error;
mod fetch;
pub mod registry;
mod resource;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use compiler::Compiler;
pub use context::{Context, ContextOptions};
pub use error::CompileError;
pub use registry::{can_compile, compiler_for, full_extension};
pub use resource::{normalize_path, Resource};

/// Compile the file at `input_path` with the compiler its extension selects.
///
/// Starts a top-level compile when handed a fresh [`Context`]; the EJS
/// compiler also calls back into this for local imports.
#[tracing::instrument(level = "debug", skip_all, fields(path = %input_path.display()))]
pub fn compile_file(
    cx: &mut Context,
    input_path: &Path,
    output: &mut dyn Write,
) -> Result<(), CompileError> {
    let mut input = File::open(input_path).map_err(|source| CompileError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    compiler_for(input_path).compile(cx, input_path, None, &mut input, output)
}
