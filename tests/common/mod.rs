//! Common test infrastructure
//!
//! This module provides the shared identifiers and fixture builders used by
//! the end-to-end tests. Tests should only import from this module, not from
//! internal submodules.

mod constants;
mod fixtures;

pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::*;

/// Install a logging subscriber driven by `RUST_LOG`, once per test binary.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
