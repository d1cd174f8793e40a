//! Reverse proxy to the configured origin.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{Method, StatusCode};
use axum::response::Response;
use url::Url;

use crate::ServeError;

/// Headers that describe a single connection and are not forwarded.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

pub(crate) fn client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// What the origin said.
pub(crate) enum Forwarded {
    Response(Response),
    /// The origin has no such resource and the request was a GET, so the
    /// caller may still try to serve it locally.
    NotFound,
}

/// Forward `request` to `origin`, preserving method, headers and body.
pub(crate) async fn forward(
    client: &reqwest::Client,
    origin: &Url,
    request: Request,
) -> Result<Forwarded, ServeError> {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path().to_string();
    let target = target_url(origin, &path, parts.uri.query());
    tracing::debug!(method = %parts.method, %path, %target, "proxying");

    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| ServeError::BadRequest(format!("could not read request body: {err}")))?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let proxy_error = |source| ServeError::Proxy {
        path: path.clone(),
        origin: origin.clone(),
        source,
    };

    let upstream = client
        .request(parts.method.clone(), target)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(proxy_error)?;

    let status = upstream.status();
    if status == StatusCode::NOT_FOUND && parts.method == Method::GET {
        return Ok(Forwarded::NotFound);
    }

    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(header::CONTENT_LENGTH);
    let bytes = upstream.bytes().await.map_err(proxy_error)?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(Forwarded::Response(response))
}

/// `origin` with the request path appended to its own path.
fn target_url(origin: &Url, path: &str, query: Option<&str>) -> Url {
    let mut target = origin.clone();
    let joined = format!(
        "{}/{}",
        origin.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    target.set_path(&joined);
    target.set_query(query);
    target
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}
