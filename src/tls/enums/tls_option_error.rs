use thiserror::Error;
use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::tls_version::TlsVersion;

#[derive(Error, Debug)]
pub enum TlsOptionError {
    #[error("unsupported TLS version: {0}")]
    UnsupportedVersion(String),

    #[error("TLS min version ({min}) is greater than max version ({max})")]
    VersionRange { min: TlsVersion, max: TlsVersion },

    #[error("no TLS version between {min} and {max} can be served (only TLS 1.2 and TLS 1.3 are available)")]
    NoSupportedVersion { min: TlsVersion, max: TlsVersion },

    #[error("unsupported cipher suite: {0}")]
    UnsupportedCipherSuite(String),

    #[error("none of the configured cipher suites can be negotiated with TLS 1.2")]
    NoUsableCipherSuite,

    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("none of the configured curves is available")]
    NoUsableCurve,

    #[error("unsupported client auth type: {0}")]
    UnsupportedClientAuth(String),

    #[error("client auth mode {0} needs server.ssl.client_ca_cert")]
    MissingClientCa(ClientAuthMode),

    #[error("failed to read client CA cert {path}: {source}")]
    ClientCaRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse client CA cert {0}")]
    ClientCaParse(String),

    #[error("client certificate verifier: {0}")]
    Verifier(String),

    #[error("rustls: {0}")]
    Rustls(#[from] rustls::Error),
}
