use std::sync::Arc;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::ResolvesServerCert;

pub enum ServerCertificate {
    /// One chain for every handshake.
    Single {
        chain: Vec<CertificateDer<'static>>,
        key: PrivateKeyDer<'static>,
    },
    /// Per-handshake lookup, used for ACME issued certificates.
    Resolver(Arc<dyn ResolvesServerCert>),
}
