use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::StatusCode;
use slang_compile::CompileError;
use thiserror::Error;
use url::Url;

use crate::RouteError;

/// Failure of one request, rendered as an error page.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("no such resource: {0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("could not compile {}", path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: CompileError,
    },

    #[error("could not proxy {path} to {origin}")]
    Proxy {
        path: String,
        origin: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("no proxy is configured for non-managed resource: {0}")]
    NoProxy(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::NotFound(_) => StatusCode::NOT_FOUND,
            ServeError::BadRequest(_) | ServeError::Route(_) => StatusCode::BAD_REQUEST,
            ServeError::Compile { .. } | ServeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServeError::Proxy { .. } | ServeError::NoProxy(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Failure to start or keep running the server.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("could not build the proxy client")]
    Client(#[source] reqwest::Error),

    #[error("could not bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server stopped")]
    Serve(#[source] io::Error),
}
