use std::sync::Arc;

#[derive(Clone)]
pub struct IssuedCertificate {
    pub(crate) certified_key: Arc<rustls::sign::CertifiedKey>,
    pub(crate) not_after: Option<chrono::DateTime<chrono::Utc>>,
}
