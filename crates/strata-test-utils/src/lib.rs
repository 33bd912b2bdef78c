//! Test utilities for strata development.
//!
//! Provides [`init_tracing`] for tests and benches that want to see the
//! arena's `tracing` events, plus the shared [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber writing to the test harness.
///
/// Honors `RUST_LOG` and defaults to `warn`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
