use async_trait::async_trait;
use crate::server::enums::server_error::ServerError;
use crate::server::structs::listener_failure::ListenerFailure;

#[async_trait]
pub trait SystemStop: Send + Sync {
    /// Runs the full shutdown sequence. `cause` is the failure that triggered it, if any.
    async fn stop_system(&self, cause: Option<ListenerFailure>) -> Result<(), ServerError>;

    fn is_shutting_down(&self) -> bool;
}
