//! Command handlers for the `slang` CLI.
//!
//! Each submodule implements one subcommand. Reporting errors to the
//! terminal lives here.

pub mod build;
mod init;
mod lex;
mod run;

use std::error::Error as StdError;
use std::io::IsTerminal;

use slang_diagnostic::{Annotation, ColorMode, Report, ReportEmitter, TerminalEmitter};

pub use build::build;
pub use init::{init, DEFAULT_CONFIG};
pub use lex::lex_file;
pub use run::run;

/// Lines of source shown on each side of an error line.
const EXCERPT_CONTEXT: usize = 3;

/// Print `err` and its causes to stderr as a report.
pub fn report_error(err: &(dyn StdError + 'static)) {
    let report = Report::from_error(err, |located| {
        located.excerpt_lines(Annotation::Caret, EXCERPT_CONTEXT, str::to_owned)
    });
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal());
    emitter.emit(&report);
    emitter.flush();
}
