//! Report emitters.
//!
//! The terminal emitter lives here; the HTTP server provides an HTML
//! emitter of its own on top of the same trait.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Report;

/// Sink for rendered reports.
pub trait ReportEmitter {
    fn emit(&mut self, report: &Report);

    fn flush(&mut self);
}
