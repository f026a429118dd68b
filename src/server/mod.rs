//! Server lifecycle module.
//!
//! `ServerOrchestrator` owns the plain and encrypted listeners, the ACME
//! challenge listener and the renewal ticker, and tears them down in a fixed
//! order:
//!
//! 1. renewal scheduler
//! 2. challenge listener
//! 3. main listeners, concurrently, each bounded by the same deadline
//! 4. fan-in error queue and shutdown signal
//!
//! Listener failures after startup travel through a bounded fan-in queue to
//! the error monitor, the only component allowed to start a cascading stop.
//!
//! # Example
//!
//! ```rust,ignore
//! use gatehouse::server::structs::server_orchestrator::ServerOrchestrator;
//!
//! let orchestrator = ServerOrchestrator::configure(&config, routes, Logger::global("gatehouse::server"))?;
//! orchestrator.start(cancel_rx).await?;
//! // ...
//! orchestrator.stop(Duration::from_secs(15)).await?;
//! ```

/// Lifecycle enums (state, listener kind, errors).
pub mod enums;

/// Lifecycle data structures.
pub mod structs;

/// Implementation blocks for lifecycle types.
pub mod impls;

/// Seams between the orchestrator and its background tasks.
pub mod traits;

/// Background tasks: listener serving, error monitor, renewal scheduler.
#[allow(clippy::module_inception)]
pub mod server;
