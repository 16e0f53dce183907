//! Tracing/logging setup shared by the stock ledger binaries.

/// Tracing configuration (filters, layers, sink).
pub mod tracing;

pub use self::tracing::{DEFAULT_LOG_PATH, LogConfig, init};
