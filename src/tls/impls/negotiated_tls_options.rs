use std::sync::Arc;
use rustls::crypto::CryptoProvider;
use rustls::server::danger::ClientCertVerifier;
use rustls::server::WebPkiClientVerifier;
use rustls::{RootCertStore, ServerConfig, SupportedProtocolVersion};
use crate::common::structs::logger::Logger;
use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::named_curve::NamedCurve;
use crate::tls::enums::renegotiation_policy::RenegotiationPolicy;
use crate::tls::enums::server_certificate::ServerCertificate;
use crate::tls::enums::tls_option_error::TlsOptionError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::any_client_cert_verifier::AnyClientCertVerifier;
use crate::tls::structs::negotiated_tls_options::NegotiatedTlsOptions;
use crate::tls::tls::effective_versions;

impl NegotiatedTlsOptions {
    pub fn min_version(&self) -> TlsVersion {
        self.min_version
    }

    pub fn max_version(&self) -> TlsVersion {
        self.max_version
    }

    pub fn cipher_suites(&self) -> &[u16] {
        &self.cipher_suites
    }

    pub fn curve_preferences(&self) -> &[NamedCurve] {
        &self.curve_preferences
    }

    pub fn client_auth(&self) -> ClientAuthMode {
        self.client_auth
    }

    pub fn renegotiation(&self) -> RenegotiationPolicy {
        self.renegotiation
    }

    pub fn client_ca_pool(&self) -> Option<&Arc<RootCertStore>> {
        self.client_ca_pool.as_ref()
    }

    pub fn crypto_provider(&self) -> &Arc<CryptoProvider> {
        &self.crypto_provider
    }

    pub fn effective_versions(&self) -> Result<Vec<TlsVersion>, TlsOptionError> {
        effective_versions(self.min_version, self.max_version)
    }

    pub fn client_verifier(&self) -> Result<Arc<dyn ClientCertVerifier>, TlsOptionError> {
        let subjects = self.client_ca_pool.as_ref()
            .map(|roots| roots.subjects())
            .unwrap_or_default();
        match self.client_auth {
            ClientAuthMode::None => Ok(WebPkiClientVerifier::no_client_auth()),
            ClientAuthMode::Request => Ok(Arc::new(AnyClientCertVerifier::new(false, subjects, self.crypto_provider.clone()))),
            ClientAuthMode::RequireAny => Ok(Arc::new(AnyClientCertVerifier::new(true, subjects, self.crypto_provider.clone()))),
            ClientAuthMode::VerifyIfGiven | ClientAuthMode::RequireAndVerify => {
                let roots = self.client_ca_pool.clone().ok_or(TlsOptionError::MissingClientCa(self.client_auth))?;
                let mut builder = WebPkiClientVerifier::builder_with_provider(roots, self.crypto_provider.clone());
                if self.client_auth == ClientAuthMode::VerifyIfGiven {
                    builder = builder.allow_unauthenticated();
                }
                builder.build().map_err(|error| TlsOptionError::Verifier(error.to_string()))
            }
        }
    }

    /// Final rustls config for the encrypted listener, advertising `h2` and `http/1.1`.
    pub fn server_config(&self, certificate: ServerCertificate, logger: &Logger) -> Result<ServerConfig, TlsOptionError> {
        let versions: Vec<&'static SupportedProtocolVersion> = self.effective_versions()?
            .iter()
            .filter_map(|version| version.rustls_version())
            .collect();

        let builder = ServerConfig::builder_with_provider(self.crypto_provider.clone())
            .with_protocol_versions(&versions)?
            .with_client_cert_verifier(self.client_verifier()?);

        let mut config = match certificate {
            ServerCertificate::Single { chain, key } => builder.with_single_cert(chain, key)?,
            ServerCertificate::Resolver(resolver) => builder.with_cert_resolver(resolver),
        };
        config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

        if self.renegotiation == RenegotiationPolicy::OnceAsClient {
            logger.info(concat!(
                "[TLS] renegotiation is enabled in the configuration, servers never renegotiate ",
                "so the setting only applies to outbound clients"
            ));
        }
        Ok(config)
    }
}
