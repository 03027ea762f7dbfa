//! crates/logging/src/subscriber.rs
//! Installation of the stderr tracing subscriber.

use super::config::VerbosityConfig;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with the given verbosity, writing to standard error.
///
/// Returns `true` when this call installed the global subscriber and `false`
/// when one was already present.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(VerbosityConfig::from_verbose_level(2));
/// tracing::debug!(target: "dircat::walk", "entering directory");
/// ```
pub fn init_tracing(config: VerbosityConfig) -> bool {
    init_tracing_with_writer(config, io::stderr)
}

/// Initialize tracing with the given verbosity and an explicit writer factory.
///
/// `RUST_LOG` takes precedence over `config` when it holds a valid filter.
pub fn init_tracing_with_writer<W>(config: VerbosityConfig, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directives()));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
