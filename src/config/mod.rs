//! Configuration management module.
//!
//! Loads the TOML configuration file and turns the raw `[server]` section into
//! a validated, immutable `ParsedServerConfig`.
//!
//! # Configuration Structure
//!
//! - **environment**: deployment tag, `"development"` enables self-signed certificates
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **server**: listener addresses, timeouts and HTTPS redirect switch
//! - **server.ssl**: TLS versions, ciphers, curves, client auth, certificate sources
//!
//! # Example
//!
//! ```rust,ignore
//! use gatehouse::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let parsed = config.server.parse(&config.environment)?;
//! ```

/// Configuration enumerations (ACME provider, validation errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving and parsing.
pub mod impls;

/// Raw-to-parsed configuration conversion.
#[allow(clippy::module_inception)]
pub mod config;

#[cfg(test)]
mod tests;
