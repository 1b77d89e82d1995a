//! `tracing` subscriber setup for the tools binaries.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, fmt::format::FmtSpan, prelude::*};

/// Filter from `RUST_LOG` when set, otherwise `default_directive`.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs a stderr subscriber so narrative output on stdout stays clean.
/// A second call is a no-op.
pub fn init(default_directive: &str) {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let installed = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(build_filter(default_directive))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default_directive, "logging initialized");
    }
}
