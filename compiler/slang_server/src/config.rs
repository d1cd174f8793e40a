use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use slang_compile::ContextOptions;
use url::Url;

use crate::RouteTable;

pub const DEFAULT_PORT: u16 = 9090;

/// Everything a running server needs, fixed at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Document root that request paths are resolved under.
    pub root: PathBuf,
    /// Origin for unmanaged requests and local misses.
    pub proxy: Option<Url>,
    pub routes: RouteTable,
    /// Answer a local miss with 404 instead of proxying it.
    pub strict: bool,
    /// Options for each request's compile context.
    pub options: ContextOptions,
}

impl ServerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ServerConfig {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            root: root.into(),
            proxy: None,
            routes: RouteTable::default(),
            strict: false,
            options: ContextOptions::empty(),
        }
    }

    /// Whether a local miss should be handed to the proxy.
    pub fn falls_back_to_proxy(&self) -> bool {
        !self.strict && self.proxy.is_some()
    }
}
