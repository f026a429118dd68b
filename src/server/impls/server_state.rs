use std::fmt;
use crate::server::enums::server_state::ServerState;

impl ServerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ServerState::Stopped | ServerState::ValidationFailed | ServerState::ProvisioningFailed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerState::Configured => "configured",
            ServerState::Starting => "starting",
            ServerState::Running => "running",
            ServerState::Stopping => "stopping",
            ServerState::Stopped => "stopped",
            ServerState::ValidationFailed => "validation failed",
            ServerState::ProvisioningFailed => "provisioning failed",
        }
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
