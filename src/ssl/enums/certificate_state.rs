use std::sync::Arc;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

/// Exactly one variant is active per process start.
#[derive(Debug, Clone)]
pub enum CertificateState {
    ManualFiles(Arc<CertificateBundle>),
    SelfSigned(Arc<CertificateBundle>),
    Acme(Arc<AcmeCertManager>),
}
