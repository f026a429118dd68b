use crate::config::enums::config_validation_error::ConfigValidationError;
use crate::server::enums::server_error::ServerError;
use crate::server::enums::server_state::ServerState;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::tls::enums::tls_option_error::TlsOptionError;

impl From<ProvisioningError> for ServerError {
    fn from(error: ProvisioningError) -> Self {
        match error {
            ProvisioningError::ChallengeBind { .. } | ProvisioningError::ChallengeStartup(_) => {
                ServerError::ChallengeStartup(error)
            }
            other => ServerError::Provisioning(other),
        }
    }
}

impl From<TlsOptionError> for ServerError {
    fn from(error: TlsOptionError) -> Self {
        ServerError::ConfigValidation(ConfigValidationError::Tls(error))
    }
}

impl ServerError {
    /// Terminal state a failed `start` leaves the orchestrator in.
    pub fn failure_state(&self) -> ServerState {
        match self {
            ServerError::ConfigValidation(_) => ServerState::ValidationFailed,
            _ => ServerState::ProvisioningFailed,
        }
    }
}
