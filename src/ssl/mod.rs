//! Certificate provisioning module.
//!
//! Produces the certificate source for the encrypted listener using exactly one
//! of three strategies, chosen once at startup:
//!
//! - **Manual**: PEM certificate chain and key loaded from disk
//! - **Self-signed**: generated on the fly, only in the `development` environment
//! - **ACME**: issued by Let's Encrypt or ZeroSSL (with External Account Binding),
//!   validated through an HTTP-01 challenge listener and served by SNI
//!
//! # Example
//!
//! ```rust,ignore
//! use gatehouse::ssl::ssl::provision_certificates;
//!
//! let state = provision_certificates(&parsed, &logger)?;
//! let tls = options.server_config(state.server_certificate(), &logger)?;
//! ```

/// Provisioning enums (strategy, state, errors).
pub mod enums;

/// Provisioning data structures.
pub mod structs;

/// Implementation blocks for provisioning types.
pub mod impls;

/// Strategy selection, manual loading and self-signed generation.
#[allow(clippy::module_inception)]
pub mod ssl;

/// HTTP-01 challenge listener.
pub mod challenge;
