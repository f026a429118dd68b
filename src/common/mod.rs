//! Common utilities and shared functionality.
//!
//! Helpers used by every other module of the crate.
//!
//! # Utilities
//!
//! - Logging setup (`fern` backed)
//! - Duration parsing for `"15s"`, `"1m30s"` style values
//! - Bind address resolution for `":443"` and `"host:port"` values
//! - HTTPS redirect location building
//! - Cancellation helpers for `tokio::sync::watch` channels
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type
//! - `Logger` - Logging capability handed to components instead of a global
//! - `MemoryLogSink` - Capturing log sink used by tests

/// Common data structures (errors, logger capability).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
