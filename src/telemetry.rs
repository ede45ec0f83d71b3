//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over `default_filter`.
/// Safe to call more than once; later calls keep the installed subscriber.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}
