use std::sync::Arc;
use rustls::server::{ClientHello, ResolvesServerCert};
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::acme_certificate_resolver::AcmeCertificateResolver;

impl std::fmt::Debug for AcmeCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcmeCertificateResolver")
            .field("domains", &self.manager.domains())
            .finish()
    }
}

impl AcmeCertificateResolver {
    pub fn new(manager: Arc<AcmeCertManager>) -> Self {
        Self { manager }
    }
}

impl ResolvesServerCert for AcmeCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<rustls::sign::CertifiedKey>> {
        let Some(server_name) = client_hello.server_name() else {
            self.manager.logger.debug("[ACME] Handshake without SNI rejected");
            return None;
        };
        if !self.manager.host_allowed(server_name) {
            self.manager.logger.debug(format!("[ACME] Handshake for {} rejected, host not in whitelist", server_name));
            return None;
        }
        self.manager.certified_key(server_name)
    }
}
