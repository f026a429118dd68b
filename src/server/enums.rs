/// Kind of a listener.
pub mod listener_kind;

/// Lifecycle errors.
pub mod server_error;

/// Lifecycle state.
pub mod server_state;
