use std::net::SocketAddr;
use thiserror::Error;
use crate::ssl::enums::certificate_error::CertificateError;

#[derive(Debug, Error)]
pub enum ProvisioningError {
    #[error("server.ssl.cert_file and server.ssl.key_file are required when SSL is enabled outside development")]
    MissingCertificateFiles,

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error("self-signed certificates should only be used in development mode (environment is \"{0}\")")]
    SelfSignedOutsideDevelopment(String),

    #[error("failed to generate certificate: {0}")]
    CertificateGeneration(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("auto_ssl_domains must contain at least one domain")]
    MissingDomains,

    #[error("ZeroSSL requires {0}")]
    MissingExternalAccountBinding(&'static str),

    #[error("ACME: {0}")]
    Acme(String),

    #[error("challenge server could not bind {address}: {source}")]
    ChallengeBind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("challenge server failed to start: {0}")]
    ChallengeStartup(String),
}
