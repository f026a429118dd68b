//! TLS option builder.
//!
//! Turns the names found in `[server.ssl]` (versions, cipher suites, curves,
//! client-auth mode) into a `NegotiatedTlsOptions` value and finally into a
//! `rustls::ServerConfig` for the encrypted listener.
//!
//! The builder runs once per process. Its output is never changed afterwards
//! and is shared read-only by every listener.

/// Version, curve, client-auth and error enums.
pub mod enums;

/// Negotiated options and the accept-any client verifier.
pub mod structs;

/// Implementation blocks for the TLS types.
pub mod impls;

/// Name tables and the option builder.
#[allow(clippy::module_inception)]
pub mod tls;

#[cfg(test)]
mod tests;
