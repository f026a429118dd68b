use std::collections::HashMap;
use std::path::PathBuf;
use instant_acme::Account;
use parking_lot::RwLock;
use crate::common::structs::logger::Logger;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::ssl::structs::external_account_binding::ExternalAccountBinding;
use crate::ssl::structs::issued_certificate::IssuedCertificate;

/// Issues, caches and serves certificates for a fixed domain whitelist.
pub struct AcmeCertManager {
    pub(crate) domains: Vec<String>,
    pub(crate) contact_email: String,
    pub(crate) provider: AcmeProvider,
    pub(crate) directory_url: String,
    pub(crate) external_account: Option<ExternalAccountBinding>,
    pub(crate) cache_dir: Option<PathBuf>,
    pub(crate) certificates: RwLock<HashMap<String, IssuedCertificate>>,
    /// HTTP-01 token to key authorization.
    pub(crate) challenges: RwLock<HashMap<String, String>>,
    /// Held for a whole issuance pass, so orders never run concurrently.
    pub(crate) account: tokio::sync::Mutex<Option<Account>>,
    pub(crate) logger: Logger,
}
