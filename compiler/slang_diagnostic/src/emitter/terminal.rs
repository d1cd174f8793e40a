//! Terminal Emitter
//!
//! Human-readable report output with optional ANSI color support.

use std::io::{self, Write};

use crate::Report;

use super::ReportEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes reports as indented plain text.
///
/// ```text
/// error: compilation error
///   --> src/app.ejs:1:8
///       expected quoted string
///     |
///     | #import foo
///     |        ^
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> ReportEmitter for TerminalEmitter<W> {
    fn emit(&mut self, report: &Report) {
        self.write_colored("error", colors::ERROR);
        if let Some(status) = &report.status {
            let _ = write!(self.writer, " [{status}]");
        }
        let _ = write!(self.writer, ": ");
        self.write_colored(&report.message, colors::BOLD);
        let _ = writeln!(self.writer);

        for issue in &report.issues {
            let mut lines = issue.message.lines();
            if let Some(first) = lines.next() {
                let _ = write!(self.writer, "  --> ");
                if issue.excerpt.is_some() {
                    self.write_colored(first, colors::LOCATION);
                } else {
                    let _ = write!(self.writer, "{first}");
                }
                let _ = writeln!(self.writer);
            }
            for rest in lines {
                let _ = writeln!(self.writer, "      {rest}");
            }

            if let Some(excerpt) = &issue.excerpt {
                let _ = writeln!(self.writer, "    |");
                for line in excerpt {
                    let _ = writeln!(self.writer, "    | {line}");
                }
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
