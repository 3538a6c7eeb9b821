//! Tracing setup for the `check-digit` binary.
//!
//! The library itself only emits `tracing` events. Binaries call
//! [`setup_tracing`] once to install a console subscriber filtered by
//! `RUST_LOG` (defaulting to `info`):
//!
//! ```text
//! RUST_LOG=check_digit=debug check-digit validate ABC4321W
//! ```
//!
//! Without the `pretty_logs` feature, lines are plain text for log aggregation.
//! With it, they are colorized and timestamped.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[cfg(not(feature = "pretty_logs"))]
mod production;

#[cfg(feature = "pretty_logs")]
mod pretty;

const DEFAULT_FILTER: &str = "info";

/// Installs the console subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn setup_tracing() {
    Registry::default().with(setup_console_layer()).init();
    tracing::debug!("Tracing initialized [reporting to console]");
}

fn setup_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(feature = "pretty_logs")]
fn setup_console_layer() -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(pretty::PrettyConsoleLogFormat)
        .with_filter(setup_filter())
        .boxed()
}

#[cfg(not(feature = "pretty_logs"))]
fn setup_console_layer() -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .event_format(production::PlainLogFormat)
        .with_filter(setup_filter())
        .boxed()
}
