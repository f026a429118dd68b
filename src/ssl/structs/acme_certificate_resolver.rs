use std::sync::Arc;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;

pub struct AcmeCertificateResolver {
    pub(crate) manager: Arc<AcmeCertManager>,
}
