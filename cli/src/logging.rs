//! Logging
//!
//! Installs the global `tracing` subscriber. Level comes from `RUST_LOG`,
//! defaulting to `info`; output goes to stderr so digests on stdout stay clean.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INSTALL_GUARD: OnceLock<()> = OnceLock::new();

/// Initialize the global tracing subscriber once.
pub fn init_tracing() {
    INSTALL_GUARD.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact();

        if tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            // Another subscriber is already installed; keep it.
        }
    });
}
