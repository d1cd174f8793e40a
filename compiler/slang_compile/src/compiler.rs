//! The closed set of compilers.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::registry::full_extension;
use crate::{backend, ejs, CompileError, Context};

/// A compiler variant, as selected by [`compiler_for`](crate::compiler_for).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Compiler {
    /// Copies input to output unchanged.
    Literal,
    /// SCSS/CSS through the stylesheet backend.
    Stylesheet { compress: bool },
    /// JavaScript through the minifier backend.
    Minify,
    /// Expands `#import` directives.
    Ejs,
    /// Pipes each stage's output into the next stage.
    Chain(Vec<Compiler>),
}

impl Compiler {
    pub fn name(&self) -> &'static str {
        match self {
            Compiler::Literal => "literal",
            Compiler::Stylesheet { .. } => backend::STYLESHEET,
            Compiler::Minify => "minifier",
            Compiler::Ejs => "ejs",
            Compiler::Chain(_) => "chain",
        }
    }

    /// Where the compiled form of `input_path` is written.
    ///
    /// A chain folds its stages left to right, so `app.min.ejs` becomes
    /// `app.min.js` and then `app.js`.
    pub fn output_path(&self, input_path: &Path) -> Result<PathBuf, CompileError> {
        let invalid = || CompileError::InvalidExtension {
            compiler: self.name(),
            path: input_path.to_path_buf(),
        };
        match self {
            Compiler::Literal => Ok(input_path.to_path_buf()),
            Compiler::Stylesheet { .. } => match extension(input_path) {
                Some("scss") => Ok(input_path.with_extension("css")),
                Some("css") => Ok(input_path.to_path_buf()),
                _ => Err(invalid()),
            },
            Compiler::Ejs => match extension(input_path) {
                Some("ejs") => Ok(input_path.with_extension("js")),
                _ => Err(invalid()),
            },
            Compiler::Minify => {
                let full = full_extension(input_path);
                if full != ".min.js" {
                    return Err(invalid());
                }
                let name = input_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(invalid)?;
                let stem = &name[..name.len() - full.len()];
                Ok(input_path.with_file_name(format!("{stem}.js")))
            }
            Compiler::Chain(stages) => stages
                .iter()
                .try_fold(input_path.to_path_buf(), |path, stage| stage.output_path(&path)),
        }
    }

    /// Compile `input` into `output`.
    ///
    /// `input_path` locates the input for error messages, import
    /// resolution and stylesheet includes. `output_path` is where the
    /// output will land, when there is such a place.
    pub fn compile(
        &self,
        cx: &mut Context,
        input_path: &Path,
        output_path: Option<&Path>,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<(), CompileError> {
        match self {
            Compiler::Literal => {
                io::copy(input, output)?;
                Ok(())
            }
            Compiler::Stylesheet { compress } => {
                let source = read_source(input, input_path)?;
                let load_path = match input_path.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => dir,
                    _ => Path::new("."),
                };
                let css = backend::stylesheet(&source, load_path, *compress).map_err(
                    |message| CompileError::Backend {
                        backend: backend::STYLESHEET,
                        message,
                    },
                )?;
                output.write_all(css.as_bytes())?;
                Ok(())
            }
            Compiler::Minify => {
                let source = read_source(input, input_path)?;
                output.write_all(backend::minify(&source).as_bytes())?;
                Ok(())
            }
            Compiler::Ejs => {
                let source = read_source(input, input_path)?;
                ejs::compile(cx, input_path, &source, output)
            }
            Compiler::Chain(stages) => {
                compile_chain(stages, cx, input_path, output_path, input, output)
            }
        }
    }
}

/// Run stages in order, materializing each stage's full output before the
/// next stage reads it. The backends take whole buffers, not streams.
fn compile_chain(
    stages: &[Compiler],
    cx: &mut Context,
    input_path: &Path,
    output_path: Option<&Path>,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> Result<(), CompileError> {
    let Some((first, rest)) = stages.split_first() else {
        io::copy(input, output)?;
        return Ok(());
    };

    let mut buffer = Vec::new();
    first.compile(cx, input_path, output_path, input, &mut buffer)?;
    for stage in rest {
        let mut next = Vec::new();
        stage.compile(cx, input_path, output_path, &mut buffer.as_slice(), &mut next)?;
        buffer = next;
    }
    output.write_all(&buffer)?;
    Ok(())
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn read_source(input: &mut dyn Read, path: &Path) -> Result<String, CompileError> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| CompileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    String::from_utf8(bytes).map_err(|_| CompileError::Encoding {
        path: path.to_path_buf(),
    })
}
