//! Tracing setup shared by the binaries.
//!
//! Log output goes to stderr so stdout stays reserved for protocol lines
//! and reports. `RUST_LOG` overrides the binary's default filter.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
