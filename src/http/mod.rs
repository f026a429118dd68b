//! HTTP handlers owned by the server itself.
//!
//! The application routes are supplied from outside as a `RouteConfigurator`.
//! This module only carries the handlers the lifecycle needs on its own:
//!
//! - `http_service_redirect` - `301` to the HTTPS listener, used on the plain
//!   listener when `server.redirect_to_https` is set and by the challenge listener
//! - `http_service_acme_challenge` - serves `/.well-known/acme-challenge/{token}`

/// Data structures shared with the handlers.
pub mod structs;

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

#[cfg(test)]
mod tests;
