//! `slang run`: the development server.

use crate::config::Settings;
use crate::Error;

/// Serve until the process is stopped.
pub fn run(settings: Settings) -> Result<(), Error> {
    let server = settings.server;
    let port = server.addr.port();
    match &server.proxy {
        Some(origin) => {
            tracing::info!("starting the slang server: http://localhost:{port}/ <-> {origin}");
        }
        None => tracing::info!("starting the slang server: http://localhost:{port}/"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    runtime.block_on(slang_server::run(server))?;
    Ok(())
}
