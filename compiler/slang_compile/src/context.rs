//! Per-compile state.
//!
//! One [`Context`] spans one top-level compile: a single file in a batch
//! build, or a single HTTP request. Its visited set holds every resource
//! already emitted so cyclic and diamond-shaped import graphs terminate
//! with each resource written once.

use bitflags::bitflags;
use rustc_hash::FxHashSet;

use crate::Resource;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ContextOptions: u8 {
        /// Report skipped imports at info level rather than debug.
        const VERBOSE = 1 << 0;
        /// Precede each expanded import with a `/* #import "..." */` banner.
        const ANNOTATE_IMPORTS = 1 << 1;
    }
}

#[derive(Debug, Default)]
pub struct Context {
    options: ContextOptions,
    visited: FxHashSet<Resource>,
    client: Option<reqwest::blocking::Client>,
}

impl Context {
    pub fn new(options: ContextOptions) -> Self {
        Context {
            options,
            ..Context::default()
        }
    }

    pub fn options(&self) -> ContextOptions {
        self.options
    }

    /// Mark `resource` visited. Returns `false` if it already was.
    pub fn add_visited(&mut self, resource: Resource) -> bool {
        self.visited.insert(resource)
    }

    /// HTTP client for remote imports, built on first use.
    pub(crate) fn http_client(&mut self) -> Result<&reqwest::blocking::Client, reqwest::Error> {
        let client = match self.client.take() {
            Some(client) => client,
            None => crate::fetch::client()?,
        };
        Ok(self.client.insert(client))
    }
}

#[cfg(test)]
mod tests;
