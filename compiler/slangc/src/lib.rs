//! The `slang` command line.
//!
//! Parses arguments, merges them over the optional `slang.conf`, and hands
//! the resolved [`Settings`](config::Settings) to a command: the development
//! server, the batch builder, `init`, or the `lex` debug command.

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod logging;

pub use error::Error;
