use std::sync::Arc;
use rustls::crypto::CryptoProvider;
use rustls::RootCertStore;
use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::named_curve::NamedCurve;
use crate::tls::enums::renegotiation_policy::RenegotiationPolicy;
use crate::tls::enums::tls_version::TlsVersion;

/// Invariant: `min_version <= max_version`, checked by `build_negotiated_options`.
#[derive(Debug, Clone)]
pub struct NegotiatedTlsOptions {
    pub(crate) min_version: TlsVersion,
    pub(crate) max_version: TlsVersion,
    /// IANA ids, empty means the provider defaults.
    pub(crate) cipher_suites: Vec<u16>,
    pub(crate) curve_preferences: Vec<NamedCurve>,
    pub(crate) client_auth: ClientAuthMode,
    pub(crate) renegotiation: RenegotiationPolicy,
    pub(crate) client_ca_pool: Option<Arc<RootCertStore>>,
    /// `ring` provider narrowed to the configured suites and groups.
    pub(crate) crypto_provider: Arc<CryptoProvider>,
}
