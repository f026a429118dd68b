//! # Gatehouse
//!
//! Server lifecycle and TLS certificate provisioning engine built on actix-web
//! and rustls.
//!
//! ## Overview
//!
//! Gatehouse validates a `[server]` configuration, negotiates TLS options,
//! provisions a certificate (manual PEM files, a development self-signed pair,
//! or ACME from Let's Encrypt / ZeroSSL), brings up a plain and an encrypted
//! listener, and tears everything down in a fixed order on request, on
//! cancellation, or when a listener fails.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gatehouse::config::structs::configuration::Configuration;
//! use gatehouse::server::structs::server_orchestrator::ServerOrchestrator;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let orchestrator = ServerOrchestrator::configure(&config, routes, Logger::global("gatehouse::server"))?;
//! orchestrator.start(cancel_rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - logging bootstrap, logger capability, duration/address helpers
//! - [`config`] - configuration loading and validation
//! - [`http`] - redirect and ACME challenge handlers
//! - [`server`] - orchestrator, error monitor, renewal scheduler
//! - [`ssl`] - certificate provisioning (manual, self-signed, ACME)
//! - [`structs`] - CLI definition
//! - [`tls`] - TLS option negotiation

/// Common utilities and shared functionality.
///
/// Logging setup, the `Logger` capability handed to every component, and
/// parsers for duration and address strings.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, applies environment overrides and turns the raw
/// `[server]` section into a validated `ParsedServerConfig`.
pub mod config;

/// HTTP handlers owned by the server: HTTPS redirect and HTTP-01 challenge.
pub mod http;

/// Server lifecycle module.
///
/// Starts and stops the listeners, fans listener failures into the error
/// monitor and runs the certificate renewal scheduler.
pub mod server;

/// Certificate provisioning module.
///
/// Manual PEM loading, self-signed generation for development, and the ACME
/// certificate manager with its challenge listener.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

/// TLS option builder.
///
/// Maps version, cipher suite, curve and client authentication settings onto
/// a rustls `ServerConfig`.
pub mod tls;
