use std::sync::Arc;
use async_trait::async_trait;
use crate::server::traits::certificate_renewal::CertificateRenewal;
use crate::ssl::enums::certificate_state::CertificateState;
use crate::ssl::enums::certificate_strategy::CertificateStrategy;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::acme_certificate_resolver::AcmeCertificateResolver;
use crate::tls::enums::server_certificate::ServerCertificate;

impl CertificateState {
    pub fn strategy(&self) -> CertificateStrategy {
        match self {
            CertificateState::ManualFiles(_) => CertificateStrategy::Manual,
            CertificateState::SelfSigned(_) => CertificateStrategy::SelfSigned,
            CertificateState::Acme(_) => CertificateStrategy::Acme,
        }
    }

    pub fn acme_manager(&self) -> Option<&Arc<AcmeCertManager>> {
        match self {
            CertificateState::Acme(manager) => Some(manager),
            _ => None,
        }
    }

    pub fn server_certificate(&self) -> ServerCertificate {
        match self {
            CertificateState::ManualFiles(bundle) | CertificateState::SelfSigned(bundle) => {
                bundle.server_certificate()
            }
            CertificateState::Acme(manager) => {
                ServerCertificate::Resolver(Arc::new(AcmeCertificateResolver::new(manager.clone())))
            }
        }
    }
}

#[async_trait]
impl CertificateRenewal for CertificateState {
    async fn renew_if_needed(&self) -> Result<usize, ProvisioningError> {
        match self {
            CertificateState::Acme(manager) => manager.renew_if_needed().await,
            _ => Ok(0),
        }
    }
}
