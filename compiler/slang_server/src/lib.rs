//! The slang development server.
//!
//! Managed requests (GETs for stylesheets, scripts and pages) are resolved
//! to candidate source files, compiled on the fly and served. Everything
//! else, and any managed request with no local candidate, goes to the
//! configured origin through a reverse proxy.
//!
//! The configuration is an immutable [`ServerConfig`] built once at
//! startup and shared read-only by every request. Each request compiles
//! with its own [`slang_compile::Context`].

mod config;
mod error;
mod page;
mod proxy;
mod route;
mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServeError, StartError};
pub use route::{decode_path, mime_type, Resolution, RouteError, RouteRule, RouteTable};
pub use server::{is_managed, router, run};
