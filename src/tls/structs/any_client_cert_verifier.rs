use std::sync::Arc;
use rustls::crypto::CryptoProvider;
use rustls::DistinguishedName;

/// Accepts any presented client certificate without chain validation.
///
/// The handshake signature is still checked, so a client must own the key of
/// the certificate it sends.
#[derive(Debug)]
pub struct AnyClientCertVerifier {
    pub(crate) mandatory: bool,
    pub(crate) subjects: Vec<DistinguishedName>,
    pub(crate) provider: Arc<CryptoProvider>,
}
