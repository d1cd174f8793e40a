//! Tracing subscriber setup for the binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity.filter().into()))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
