//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Build, serve, and inspect web assets.
#[derive(Debug, Parser)]
#[command(name = "slang", version, about)]
pub struct Cli {
    /// Configuration file to use (default: ./slang.conf if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub conf: Option<PathBuf>,

    /// Port for the built-in server
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Origin that the built-in server reverse-proxies to
    #[arg(long, global = true, value_name = "URL")]
    pub proxy: Option<Url>,

    /// Routing rule, repeatable; e.g. --route /css=/styles
    #[arg(
        long = "route",
        global = true,
        value_name = "REMOTE=LOCAL",
        value_parser = parse_route
    )]
    pub routes: Vec<(String, String)>,

    /// Answer local misses with 404 instead of proxying them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Copy unmanaged resources to the output when building
    #[arg(long, global = true)]
    pub copy: bool,

    /// Only print errors (overrides --verbose and --debug)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Be more verbose
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Be extremely verbose
    #[arg(long, global = true)]
    pub debug: bool,

    /// Mark each expanded import with a comment banner
    #[arg(long, global = true)]
    pub annotate: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the built-in server
    Run {
        /// Document root (default: the configured root, or .)
        root: Option<PathBuf>,
    },
    /// Compile every supported asset under the inputs
    Build {
        /// Directory to write compiled resources to
        #[arg(short, long, default_value = "./slang.out")]
        output: PathBuf,
        /// Files or directories to build
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Write a default slang.conf
    Init,
    /// Print the import scanner's tokens for a file
    Lex { file: PathBuf },
}

/// Parse a `<remote>=<local>` routing rule.
pub fn parse_route(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((remote, local)) if !remote.trim().is_empty() => {
            Ok((remote.trim().to_string(), local.trim().to_string()))
        }
        _ => Err("routing rules must be formatted as '<remote>=<local>'".to_string()),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
