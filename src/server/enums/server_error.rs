use std::net::SocketAddr;
use thiserror::Error;
use crate::config::enums::config_validation_error::ConfigValidationError;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::enums::server_state::ServerState;
use crate::server::structs::listener_failure::ListenerFailure;
use crate::ssl::enums::provisioning_error::ProvisioningError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration rejected: {0}")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("certificate provisioning failed: {0}")]
    Provisioning(ProvisioningError),

    #[error("ACME challenge listener failed: {0}")]
    ChallengeStartup(ProvisioningError),

    #[error("{kind} listener could not bind {address}: {source}")]
    Bind {
        kind: ListenerKind,
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Listener(ListenerFailure),

    #[error("{listener} listener shutdown failed: {reason}")]
    Shutdown {
        listener: ListenerKind,
        reason: String,
    },

    #[error("{0} listener registered twice")]
    DuplicateListener(ListenerKind),

    #[error("cannot {operation} while the server is {state}")]
    InvalidState {
        operation: &'static str,
        state: ServerState,
    },
}
