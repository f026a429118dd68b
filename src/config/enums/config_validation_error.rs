use thiserror::Error;
use crate::tls::enums::tls_option_error::TlsOptionError;

#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid {field} \"{value}\": {reason}")]
    InvalidDuration {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid {field} \"{value}\": {reason}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown auto_ssl_provider \"{0}\" (expected \"letsencrypt\" or \"zerossl\")")]
    UnknownAcmeProvider(String),

    #[error("invalid TLS options: {0}")]
    Tls(#[from] TlsOptionError),
}
