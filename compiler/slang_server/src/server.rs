//! Request dispatch: local compile first for managed resources, proxy
//! first for everything else.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Router;
use slang_compile::{can_compile, compile_file, Context, ContextOptions};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::page::error_response;
use crate::proxy::{self, Forwarded};
use crate::route::{decode_path, extension};
use crate::{ServeError, ServerConfig, StartError};

/// Extensions served locally even when no compiler claims them.
const MANAGED_EXTENSIONS: [&str; 3] = [".css", ".js", ".html"];

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
    client: reqwest::Client,
}

/// Whether a request is answered from local sources before the proxy.
pub fn is_managed(method: &Method, path: &str) -> bool {
    *method == Method::GET
        && (can_compile(Path::new(path)) || MANAGED_EXTENSIONS.contains(&extension(path)))
}

/// Build the application router for `config`.
pub fn router(config: ServerConfig) -> Result<Router, StartError> {
    let state = AppState {
        config: Arc::new(config),
        client: proxy::client().map_err(StartError::Client)?,
    };
    Ok(Router::new()
        .fallback(handle)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind `config.addr` and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> Result<(), StartError> {
    let addr = config.addr;
    let app = router(config)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartError::Bind { addr, source })?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await.map_err(StartError::Serve)
}

async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let result = match decode_path(request.uri().path()) {
        Ok(path) if is_managed(&method, &path) => {
            local_first(&state, &method, path, request).await
        }
        Ok(path) => proxy_first(&state, &method, path, request).await,
        Err(err) => Err(err.into()),
    };
    result.unwrap_or_else(|err| error_response(&err))
}

async fn local_first(
    state: &AppState,
    method: &Method,
    path: String,
    request: Request,
) -> Result<Response, ServeError> {
    if let Some(response) = serve_local(state, method, &path).await? {
        return Ok(response);
    }
    match &state.config.proxy {
        Some(origin) if state.config.falls_back_to_proxy() => {
            match proxy::forward(&state.client, origin, request).await? {
                Forwarded::Response(response) => Ok(response),
                Forwarded::NotFound => Err(ServeError::NotFound(path)),
            }
        }
        _ => Err(ServeError::NotFound(path)),
    }
}

async fn proxy_first(
    state: &AppState,
    method: &Method,
    path: String,
    request: Request,
) -> Result<Response, ServeError> {
    let Some(origin) = &state.config.proxy else {
        return Err(ServeError::NoProxy(path));
    };
    match proxy::forward(&state.client, origin, request).await? {
        Forwarded::Response(response) => Ok(response),
        Forwarded::NotFound => {
            let local = serve_local(state, method, &path).await?;
            local.ok_or(ServeError::NotFound(path))
        }
    }
}

/// Compile and serve the first existing candidate for `path`, or `None`
/// if no candidate exists.
async fn serve_local(
    state: &AppState,
    method: &Method,
    path: &str,
) -> Result<Option<Response>, ServeError> {
    let resolution = state.config.routes.resolve(&state.config.root, path)?;
    tracing::debug!(%path, candidates = ?resolution.candidates, "resolving");

    let options = state.config.options;
    let candidates = resolution.candidates;
    let compiled = tokio::task::spawn_blocking(move || compile_first(&candidates, options))
        .await
        .map_err(|err| ServeError::Internal(err.to_string()))??;

    let Some((file, body)) = compiled else {
        return Ok(None);
    };
    tracing::info!("{method} {path} → {}", file.display());
    Ok(Some(([(CONTENT_TYPE, resolution.mime)], body).into_response()))
}

fn compile_first(
    candidates: &[PathBuf],
    options: ContextOptions,
) -> Result<Option<(PathBuf, Vec<u8>)>, ServeError> {
    for candidate in candidates {
        let Ok(metadata) = fs::metadata(candidate) else {
            continue;
        };
        if metadata.is_dir() {
            return Err(ServeError::BadRequest(format!(
                "resource is not a file: {}",
                candidate.display()
            )));
        }
        let mut cx = Context::new(options);
        let mut body = Vec::new();
        compile_file(&mut cx, candidate, &mut body).map_err(|source| ServeError::Compile {
            path: candidate.clone(),
            source,
        })?;
        return Ok(Some((candidate.clone(), body)));
    }
    Ok(None)
}
