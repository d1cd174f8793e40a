//! Remote imports over HTTP.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::{CompileError, Context};

const TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("slang/", env!("CARGO_PKG_VERSION"));

pub(crate) fn client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// Copy the body of `url` into `output` verbatim.
pub(crate) fn copy_remote(
    cx: &mut Context,
    url: &str,
    output: &mut dyn Write,
) -> Result<(), CompileError> {
    let fetch_error = |source| CompileError::Fetch {
        url: url.to_string(),
        source,
    };

    tracing::debug!(url, "fetching remote import");
    let client = cx.http_client().map_err(fetch_error)?;
    let mut response = client.get(url).send().map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CompileError::FetchStatus {
            url: url.to_string(),
            status,
        });
    }

    response.copy_to(output).map_err(fetch_error)?;
    Ok(())
}
