/// Failure reported by a listener task.
pub mod listener_failure;

/// Running listener and its serving task.
pub mod listener_handle;

/// At most one running listener per kind.
pub mod listener_set;

/// Mutable part of the orchestrator, guarded by one lock.
pub mod orchestrator_runtime;

/// Running renewal scheduler.
pub mod renewal_ticker;

/// The server lifecycle owner.
pub mod server_orchestrator;
