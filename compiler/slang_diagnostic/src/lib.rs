//! Diagnostics for slang.
//!
//! - [`SourceError`]: an error at a line and column of a resource, able to
//!   render itself as a caret excerpt or a marker-wrapped (HTML) excerpt
//! - [`Report`]: an error's cause chain flattened into a headline and a
//!   list of issues, for the terminal and for the server's error page
//! - [`LineTable`]: byte offset to line/column conversion

pub mod emitter;
pub mod line_table;
mod report;
mod source_error;

pub use emitter::{ColorMode, ReportEmitter, TerminalEmitter};
pub use line_table::LineTable;
pub use report::{Issue, Report, COMPILATION_ERROR};
pub use source_error::{Annotation, Position, SourceError};
