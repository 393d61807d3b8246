//! Tracing initialization for TESSERA binaries

use tracing_subscriber::EnvFilter;

/// Install an env-filtered fmt subscriber
///
/// The filter defaults to `info` when `RUST_LOG` is unset. Quietly a
/// no-op if a global subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
