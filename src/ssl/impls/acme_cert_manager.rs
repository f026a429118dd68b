use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use chrono::{DateTime, Utc};
use instant_acme::{
    Account,
    AccountCredentials,
    AuthorizationStatus,
    ChallengeType,
    Identifier,
    NewAccount,
    NewOrder,
    Order,
    OrderStatus
};
use parking_lot::RwLock;
use rcgen::{CertificateParams, KeyPair};
use tokio::time::Instant;
use crate::common::structs::logger::Logger;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::ssl::impls::certificate_bundle::shared_certified_key;
use crate::ssl::ssl::{parse_certificate_expiry, validate_acme_config, write_private_file, write_public_file};
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::external_account_binding::ExternalAccountBinding;
use crate::ssl::structs::issued_certificate::IssuedCertificate;

fn acme_error(error: instant_acme::Error) -> ProvisioningError {
    ProvisioningError::Acme(error.to_string())
}

impl std::fmt::Debug for AcmeCertManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcmeCertManager")
            .field("domains", &self.domains)
            .field("provider", &self.provider)
            .field("directory_url", &self.directory_url)
            .field("external_account", &self.external_account)
            .field("cache_dir", &self.cache_dir)
            .field("certificates", &self.certificates.read().len())
            .finish()
    }
}

impl AcmeCertManager {
    pub const ACCOUNT_FILE: &'static str = "acme_account.json";
    pub const RENEWAL_WINDOW_DAYS: i64 = 30;
    pub const ORDER_TIMEOUT: Duration = Duration::from_secs(120);
    pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

    /// Validates the ACME settings and builds the manager. No network traffic happens here.
    pub fn new(config: &ParsedServerConfig, logger: Logger) -> Result<AcmeCertManager, ProvisioningError> {
        let ssl = config.ssl();
        let provider = config.acme_provider();
        validate_acme_config(ssl, provider)?;

        let external_account = if provider.requires_external_account() {
            Some(ExternalAccountBinding::new(&ssl.auto_ssl_zerossl_kid, &ssl.auto_ssl_zerossl_eab_key)?)
        } else {
            None
        };
        let cache_dir = match ssl.auto_ssl_cache_dir.trim() {
            "" => None,
            dir => Some(PathBuf::from(dir)),
        };
        let domains: Vec<String> = ssl.auto_ssl_domains.iter()
            .map(|domain| domain.trim().trim_end_matches('.').to_ascii_lowercase())
            .filter(|domain| !domain.is_empty())
            .collect();

        let manager = AcmeCertManager {
            domains,
            contact_email: ssl.auto_ssl_email.trim().to_string(),
            provider,
            directory_url: provider.directory_url().to_string(),
            external_account,
            cache_dir,
            certificates: RwLock::new(HashMap::new()),
            challenges: RwLock::new(HashMap::new()),
            account: tokio::sync::Mutex::new(None),
            logger,
        };

        if let Some(dir) = &manager.cache_dir {
            std::fs::create_dir_all(dir).map_err(|source| ProvisioningError::Io {
                path: dir.display().to_string(),
                source,
            })?;
            manager.load_cached_certificates();
        }

        manager.logger.info(format!(
            "[ACME] Certificate manager ready for {} using {}",
            manager.domains.join(", "),
            manager.provider
        ));
        Ok(manager)
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn provider(&self) -> AcmeProvider {
        self.provider
    }

    pub fn directory_url(&self) -> &str {
        &self.directory_url
    }

    pub fn external_account(&self) -> Option<&ExternalAccountBinding> {
        self.external_account.as_ref()
    }

    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }

    pub fn host_allowed(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.');
        self.domains.iter().any(|domain| domain.eq_ignore_ascii_case(host))
    }

    pub fn certified_key(&self, host: &str) -> Option<std::sync::Arc<rustls::sign::CertifiedKey>> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.certificates.read().get(&host).map(|issued| issued.certified_key())
    }

    pub fn certificate(&self, host: &str) -> Option<IssuedCertificate> {
        self.certificates.read().get(&host.to_ascii_lowercase()).cloned()
    }

    pub fn challenge_response(&self, token: &str) -> Option<String> {
        self.challenges.read().get(token).cloned()
    }

    /// Domains without a certificate, or whose certificate expires within 30 days.
    pub fn domains_needing_renewal(&self, now: DateTime<Utc>) -> Vec<String> {
        let window = chrono::Duration::days(Self::RENEWAL_WINDOW_DAYS);
        let certificates = self.certificates.read();
        self.domains.iter()
            .filter(|domain| certificates.get(*domain).is_none_or(|issued| issued.expires_within(window, now)))
            .cloned()
            .collect()
    }

    /// Obtains a certificate for every domain that needs one.
    ///
    /// Every domain is attempted; the last failure is returned after the pass.
    pub async fn renew_if_needed(&self) -> Result<usize, ProvisioningError> {
        let pending = self.domains_needing_renewal(Utc::now());
        if pending.is_empty() {
            self.logger.debug("[ACME] All certificates are valid for more than 30 days");
            return Ok(0);
        }

        let mut account_slot = self.account.lock().await;
        if account_slot.is_none() {
            *account_slot = Some(self.load_or_create_account().await?);
        }
        let Some(account) = account_slot.as_ref() else {
            return Err(ProvisioningError::Acme(String::from("ACME account unavailable")));
        };

        let mut renewed = 0;
        let mut last_error = None;
        for domain in pending {
            self.logger.info(format!("[ACME] Requesting certificate for {}", domain));
            match self.obtain_certificate(account, &domain).await {
                Ok(issued) => {
                    renewed += 1;
                    let valid_until = issued.not_after()
                        .map(|date| date.to_rfc3339())
                        .unwrap_or_else(|| String::from("unknown"));
                    self.logger.info(format!(
                        "[ACME] Certificate for {} installed, valid until {}",
                        domain,
                        valid_until
                    ));
                }
                Err(error) => {
                    self.logger.error(format!("[ACME] Certificate for {} could not be obtained: {}", domain, error));
                    last_error = Some(error);
                }
            }
        }
        match last_error {
            Some(error) => Err(error),
            None => Ok(renewed),
        }
    }

    async fn obtain_certificate(
        &self,
        account: &Account,
        domain: &str,
    ) -> Result<IssuedCertificate, ProvisioningError> {
        let mut tokens = Vec::new();
        let outcome = self.run_order(account, domain, &mut tokens).await;
        {
            let mut challenges = self.challenges.write();
            for token in &tokens {
                challenges.remove(token);
            }
        }
        let (chain_pem, key_pem) = outcome?;
        let issued = self.install_certificate(domain, &chain_pem, &key_pem)?;
        self.persist_certificate(domain, &chain_pem, &key_pem);
        Ok(issued)
    }

    async fn run_order(
        &self,
        account: &Account,
        domain: &str,
        tokens: &mut Vec<String>,
    ) -> Result<(String, String), ProvisioningError> {
        let identifiers = [Identifier::Dns(domain.to_string())];
        let mut order = account.new_order(&NewOrder { identifiers: &identifiers }).await.map_err(acme_error)?;

        let authorizations = order.authorizations().await.map_err(acme_error)?;
        for authorization in &authorizations {
            if authorization.status == AuthorizationStatus::Valid {
                continue;
            }
            let challenge = authorization.challenges.iter()
                .find(|challenge| challenge.r#type == ChallengeType::Http01)
                .ok_or_else(|| ProvisioningError::Acme(format!("no HTTP-01 challenge offered for {}", domain)))?;
            let key_authorization = order.key_authorization(challenge);
            self.challenges.write().insert(challenge.token.clone(), key_authorization.as_str().to_string());
            tokens.push(challenge.token.clone());
            order.set_challenge_ready(&challenge.url).await.map_err(acme_error)?;
        }

        let deadline = Instant::now() + Self::ORDER_TIMEOUT;
        self.wait_for_order(&mut order, domain, deadline).await?;

        let key_pair = KeyPair::generate()
            .map_err(|e| ProvisioningError::CertificateGeneration(e.to_string()))?;
        let csr = CertificateParams::new(vec![domain.to_string()])
            .and_then(|params| params.serialize_request(&key_pair))
            .map_err(|e| ProvisioningError::CertificateGeneration(e.to_string()))?;
        if order.state().status != OrderStatus::Valid {
            order.finalize(csr.der()).await.map_err(acme_error)?;
        }

        let chain_pem = loop {
            if Instant::now() > deadline {
                return Err(ProvisioningError::Acme(format!(
                    "certificate for {} was not issued within {} seconds",
                    domain,
                    Self::ORDER_TIMEOUT.as_secs()
                )));
            }
            match order.certificate().await.map_err(acme_error)? {
                Some(chain) => break chain,
                None => tokio::time::sleep(Duration::from_secs(1)).await,
            }
        };
        Ok((chain_pem, key_pair.serialize_pem()))
    }

    async fn wait_for_order(
        &self,
        order: &mut Order,
        domain: &str,
        deadline: Instant,
    ) -> Result<(), ProvisioningError> {
        loop {
            if Instant::now() > deadline {
                return Err(ProvisioningError::Acme(format!(
                    "validation for {} did not complete within {} seconds",
                    domain,
                    Self::ORDER_TIMEOUT.as_secs()
                )));
            }
            order.refresh().await.map_err(acme_error)?;
            match order.state().status {
                OrderStatus::Ready | OrderStatus::Valid => return Ok(()),
                OrderStatus::Invalid => {
                    let reason = order.state().error.as_ref()
                        .map(|problem| format!("{:?}", problem))
                        .unwrap_or_else(|| String::from("unknown error"));
                    return Err(ProvisioningError::Acme(format!("order for {} became invalid: {}", domain, reason)));
                }
                OrderStatus::Pending | OrderStatus::Processing => tokio::time::sleep(Self::POLL_INTERVAL).await,
            }
        }
    }

    /// Parses a PEM chain and key and makes them available to the resolver.
    pub fn install_certificate(
        &self,
        domain: &str,
        chain_pem: &str,
        key_pem: &str,
    ) -> Result<IssuedCertificate, ProvisioningError> {
        let certs = CertificateBundle::parse_certificates(chain_pem.as_bytes())?;
        let key = CertificateBundle::parse_private_key(key_pem.as_bytes())?;
        let not_after = parse_certificate_expiry(&certs[0]);
        let issued = IssuedCertificate::new(shared_certified_key(certs, &key)?, not_after);
        self.certificates.write().insert(domain.to_ascii_lowercase(), issued.clone());
        Ok(issued)
    }

    fn cache_path(&self, file_name: &str) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join(file_name))
    }

    fn certificate_paths(&self, domain: &str) -> Option<(PathBuf, PathBuf)> {
        Some((
            self.cache_path(&format!("{}.crt", domain))?,
            self.cache_path(&format!("{}.key", domain))?,
        ))
    }

    fn load_cached_certificates(&self) {
        for domain in &self.domains {
            let Some((cert_path, key_path)) = self.certificate_paths(domain) else {
                return;
            };
            if !cert_path.exists() || !key_path.exists() {
                continue;
            }
            let loaded = std::fs::read_to_string(&cert_path)
                .and_then(|chain| std::fs::read_to_string(&key_path).map(|key| (chain, key)));
            match loaded {
                Ok((chain_pem, key_pem)) => match self.install_certificate(domain, &chain_pem, &key_pem) {
                    Ok(_) => self.logger.info(format!("[ACME] Loaded cached certificate for {}", domain)),
                    Err(error) => {
                        self.logger.warn(format!("[ACME] Cached certificate for {} is unusable: {}", domain, error))
                    }
                },
                Err(error) => {
                    self.logger.warn(format!("[ACME] Cached certificate for {} could not be read: {}", domain, error))
                }
            }
        }
    }

    fn persist_certificate(&self, domain: &str, chain_pem: &str, key_pem: &str) {
        let Some((cert_path, key_path)) = self.certificate_paths(domain) else {
            return;
        };
        let written = write_public_file(&cert_path, chain_pem.as_bytes())
            .and_then(|_| write_private_file(&key_path, key_pem.as_bytes()));
        if let Err(error) = written {
            self.logger.warn(format!("[ACME] Certificate for {} could not be cached: {}", domain, error));
        }
    }

    fn load_account_credentials(&self) -> Option<AccountCredentials> {
        let path = self.cache_path(Self::ACCOUNT_FILE)?;
        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<AccountCredentials>(&content) {
            Ok(credentials) => Some(credentials),
            Err(error) => {
                self.logger.warn(format!("[ACME] Ignoring unreadable account file {}: {}", path.display(), error));
                None
            }
        }
    }

    async fn load_or_create_account(&self) -> Result<Account, ProvisioningError> {
        if let Some(credentials) = self.load_account_credentials() {
            match Account::from_credentials(credentials).await {
                Ok(account) => {
                    self.logger.debug("[ACME] Restored account from cache");
                    return Ok(account);
                }
                Err(error) => self.logger.warn(format!(
                    "[ACME] Cached account could not be restored, registering a new one: {}",
                    error
                )),
            }
        }

        let contact: Vec<String> = if self.contact_email.is_empty() {
            vec![]
        } else {
            vec![format!("mailto:{}", self.contact_email)]
        };
        let contact_refs: Vec<&str> = contact.iter().map(String::as_str).collect();
        let external_account = self.external_account.as_ref().map(|binding| binding.to_acme_key());

        self.logger.info(format!("[ACME] Registering account with {}", self.directory_url));
        let (account, credentials) = Account::create(
            &NewAccount {
                contact: &contact_refs,
                terms_of_service_agreed: true,
                only_return_existing: false,
            },
            &self.directory_url,
            external_account.as_ref(),
        ).await.map_err(acme_error)?;

        if let Some(path) = self.cache_path(Self::ACCOUNT_FILE) {
            let written = serde_json::to_vec_pretty(&credentials)
                .map_err(std::io::Error::other)
                .and_then(|data| write_private_file(&path, &data));
            if let Err(error) = written {
                self.logger.warn(format!("[ACME] Account credentials could not be cached: {}", error));
            }
        }
        Ok(account)
    }
}
