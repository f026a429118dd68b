pub mod listener_failure;
pub mod listener_handle;
pub mod listener_kind;
pub mod listener_set;
pub mod renewal_ticker;
pub mod server_error;
pub mod server_orchestrator;
pub mod server_state;
