//! `slang build`: compile every supported asset under a set of inputs.
//!
//! Each input (file or directory) is walked, skipping hidden entries and
//! the output tree. Paths are relocated from the input's base to the
//! output directory; each file is compiled, copied, or skipped according
//! to [`BuildConfig::action`]. The first error aborts the build.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use slang_compile::{compiler_for, normalize_path, CompileError, Context};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::config::{Action, BuildConfig};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("could not create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not compile {}", path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: CompileError,
    },

    #[error("could not copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not under {}", path.display(), base.display())]
    Relocate { path: PathBuf, base: PathBuf },

    #[error("could not write build progress")]
    Progress(#[source] io::Error),
}

/// Counts of what a build did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub compiled: usize,
    pub copied: usize,
    pub skipped: usize,
}

/// Build `inputs` into `output`, writing a `[+]`/`[~]`/`[ ]` line per file
/// to `progress` unless `quiet`.
pub fn build(
    config: &BuildConfig,
    output: &Path,
    inputs: &[PathBuf],
    quiet: bool,
    progress: &mut dyn Write,
) -> Result<BuildSummary, BuildError> {
    fs::create_dir_all(output).map_err(|source| BuildError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let output_abs = absolute(output);

    let mut builder = Builder {
        config,
        output,
        output_abs,
        quiet,
        progress,
        summary: BuildSummary::default(),
    };
    for input in inputs {
        builder.input(input)?;
    }
    Ok(builder.summary)
}

struct Builder<'a> {
    config: &'a BuildConfig,
    output: &'a Path,
    output_abs: PathBuf,
    quiet: bool,
    progress: &'a mut dyn Write,
    summary: BuildSummary,
}

impl Builder<'_> {
    fn input(&mut self, input: &Path) -> Result<(), BuildError> {
        let metadata = fs::metadata(input).map_err(|source| BuildError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let base = if metadata.is_dir() {
            input
        } else {
            input.parent().unwrap_or(Path::new(""))
        };

        let output_abs = self.output_abs.clone();
        let walker = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !excluded(entry, &output_abs));

        for entry in walker {
            let entry = entry.map_err(|source| BuildError::Walk {
                path: input.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path == base {
                continue;
            }
            let relative = path.strip_prefix(base).map_err(|_| BuildError::Relocate {
                path: path.to_path_buf(),
                base: base.to_path_buf(),
            })?;
            let target = self.output.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|source| BuildError::Create {
                    path: target.clone(),
                    source,
                })?;
            } else {
                self.file(path, &target)?;
            }
        }
        Ok(())
    }

    fn file(&mut self, path: &Path, target: &Path) -> Result<(), BuildError> {
        let action = self.config.action(path);
        let marker = match action {
            Action::Compile => {
                self.compile(path, target)?;
                self.summary.compiled += 1;
                "[+]"
            }
            Action::Copy => {
                fs::copy(path, target).map_err(|source| BuildError::Copy {
                    from: path.to_path_buf(),
                    to: target.to_path_buf(),
                    source,
                })?;
                self.summary.copied += 1;
                "[~]"
            }
            Action::Skip => {
                self.summary.skipped += 1;
                "[ ]"
            }
        };
        if !self.quiet {
            writeln!(self.progress, "{marker} {}", path.display())
                .map_err(BuildError::Progress)?;
        }
        Ok(())
    }

    fn compile(&self, path: &Path, target: &Path) -> Result<(), BuildError> {
        let compile_error = |source| BuildError::Compile {
            path: path.to_path_buf(),
            source,
        };
        let compiler = compiler_for(path);
        let target = compiler.output_path(target).map_err(compile_error)?;

        let mut input = File::open(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let create_error = |source| BuildError::Create {
            path: target.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&target).map_err(create_error)?);

        let mut cx = Context::new(self.config.options);
        compiler
            .compile(&mut cx, path, Some(&target), &mut input, &mut writer)
            .map_err(compile_error)?;
        writer.flush().map_err(create_error)
    }
}

/// Hidden entries and anything inside the output tree.
fn excluded(entry: &DirEntry, output_abs: &Path) -> bool {
    let hidden = entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..");
    hidden || absolute(entry.path()).starts_with(output_abs)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).map_or_else(|_| path.to_path_buf(), |abs| normalize_path(&abs))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
