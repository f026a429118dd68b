//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file, except
//! `ParsedServerConfig` which is derived from `ServerConfig` once at startup.

/// Root configuration structure containing all settings.
pub mod configuration;

/// `[server]` section.
pub mod server_config;

/// `[server.ssl]` section.
pub mod ssl_config;

/// Validated server configuration with resolved addresses and durations.
pub mod parsed_server_config;
