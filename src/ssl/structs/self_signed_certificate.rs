use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SelfSignedCertificate {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub not_after: chrono::DateTime<chrono::Utc>,
}
