use std::fs::OpenOptions;
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use rcgen::{
    CertificateParams,
    DistinguishedName,
    DnType,
    ExtendedKeyUsagePurpose,
    KeyPair,
    KeyUsagePurpose,
    SanType
};
use rustls::pki_types::CertificateDer;
use crate::common::structs::logger::Logger;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::config::structs::ssl_config::SslConfig;
use crate::ssl::enums::certificate_state::CertificateState;
use crate::ssl::enums::certificate_strategy::CertificateStrategy;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::self_signed_certificate::SelfSignedCertificate;

pub const SELF_SIGNED_CERT_FILE: &str = "server.crt";
pub const SELF_SIGNED_KEY_FILE: &str = "server.key";
pub const SELF_SIGNED_ORGANIZATION: &str = "Gatehouse Development";
pub const SELF_SIGNED_VALIDITY_DAYS: i64 = 365;

/// Manual files win unless the environment is `development` and a path is missing.
pub fn select_strategy(config: &ParsedServerConfig) -> CertificateStrategy {
    let ssl = config.ssl();
    if ssl.auto_ssl {
        CertificateStrategy::Acme
    } else if config.is_development() && (ssl.cert_file.is_empty() || ssl.key_file.is_empty()) {
        CertificateStrategy::SelfSigned
    } else {
        CertificateStrategy::Manual
    }
}

/// Checks the ACME settings before any manager or network call exists.
pub fn validate_acme_config(ssl: &SslConfig, provider: AcmeProvider) -> Result<(), ProvisioningError> {
    if ssl.auto_ssl_domains.iter().all(|domain| domain.trim().is_empty()) {
        return Err(ProvisioningError::MissingDomains);
    }
    if provider.requires_external_account() {
        if ssl.auto_ssl_zerossl_eab_key.trim().is_empty() {
            return Err(ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_eab_key"));
        }
        if ssl.auto_ssl_zerossl_kid.trim().is_empty() {
            return Err(ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_kid"));
        }
    }
    Ok(())
}

/// Runs the selected strategy. ACME only builds the manager here, issuance
/// happens once the challenge listener is up.
pub fn provision_certificates(
    config: &ParsedServerConfig,
    logger: &Logger,
) -> Result<CertificateState, ProvisioningError> {
    let ssl = config.ssl();
    match select_strategy(config) {
        CertificateStrategy::Manual => {
            let bundle = load_manual_certificate(ssl)?;
            logger.info(format!("[HTTPS] Loaded certificate {} and key {}", bundle.cert_path, bundle.key_path));
            Ok(CertificateState::ManualFiles(Arc::new(bundle)))
        }
        CertificateStrategy::SelfSigned => {
            logger.info("[HTTPS] No certificate configured in development mode, generating a self-signed one");
            let generated = generate_self_signed_certificate(
                config.environment(),
                Path::new(&ssl.self_signed_dir),
                logger,
            )?;
            let bundle = CertificateBundle::load_from_files(
                &generated.cert_path.to_string_lossy(),
                &generated.key_path.to_string_lossy(),
            )?;
            Ok(CertificateState::SelfSigned(Arc::new(bundle)))
        }
        CertificateStrategy::Acme => {
            let manager = AcmeCertManager::new(config, logger.child("gatehouse::acme"))?;
            Ok(CertificateState::Acme(Arc::new(manager)))
        }
    }
}

pub fn load_manual_certificate(ssl: &SslConfig) -> Result<CertificateBundle, ProvisioningError> {
    if ssl.cert_file.is_empty() || ssl.key_file.is_empty() {
        return Err(ProvisioningError::MissingCertificateFiles);
    }
    Ok(CertificateBundle::load_from_files(&ssl.cert_file, &ssl.key_file)?)
}

/// Writes `server.crt` and `server.key` (owner-only) into `directory`.
///
/// Refuses to run outside the `development` environment and writes nothing in that case.
pub fn generate_self_signed_certificate(
    environment: &str,
    directory: &Path,
    logger: &Logger,
) -> Result<SelfSignedCertificate, ProvisioningError> {
    if environment != "development" {
        return Err(ProvisioningError::SelfSignedOutsideDevelopment(environment.to_string()));
    }
    logger.info("[CERTGEN] Generating a self-signed key and certificate");

    let generation_error = |error: rcgen::Error| ProvisioningError::CertificateGeneration(error.to_string());
    let key_pair = KeyPair::generate_for(&rcgen::PKCS_ECDSA_P256_SHA256).map_err(generation_error)?;

    let mut params = CertificateParams::default();
    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::OrganizationName, SELF_SIGNED_ORGANIZATION);
    params.distinguished_name = distinguished_name;
    params.subject_alt_names = vec![
        SanType::DnsName(rcgen::string::Ia5String::try_from("localhost").map_err(generation_error)?),
        SanType::IpAddress(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        SanType::IpAddress(IpAddr::V6(Ipv6Addr::LOCALHOST)),
    ];
    let now = time::OffsetDateTime::now_utc();
    let expires = now + time::Duration::days(SELF_SIGNED_VALIDITY_DAYS);
    params.not_before = now;
    params.not_after = expires;
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature, KeyUsagePurpose::KeyEncipherment];
    params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ServerAuth];

    let cert = params.self_signed(&key_pair).map_err(generation_error)?;

    std::fs::create_dir_all(directory).map_err(|source| ProvisioningError::Io {
        path: directory.display().to_string(),
        source,
    })?;
    let cert_path = directory.join(SELF_SIGNED_CERT_FILE);
    let key_path = directory.join(SELF_SIGNED_KEY_FILE);
    write_public_file(&cert_path, cert.pem().as_bytes()).map_err(|source| ProvisioningError::Io {
        path: cert_path.display().to_string(),
        source,
    })?;
    write_private_file(&key_path, key_pair.serialize_pem().as_bytes()).map_err(|source| ProvisioningError::Io {
        path: key_path.display().to_string(),
        source,
    })?;

    logger.info(format!(
        "[CERTGEN] The files {} and {} have been generated, use them only for development",
        cert_path.display(),
        key_path.display()
    ));
    let not_after = DateTime::<Utc>::from_timestamp(expires.unix_timestamp(), 0).unwrap_or_else(Utc::now);
    Ok(SelfSignedCertificate {
        cert_path,
        key_path,
        not_after,
    })
}

/// Expiry of a DER certificate, `None` when it does not parse.
pub fn parse_certificate_expiry(cert: &CertificateDer<'_>) -> Option<DateTime<Utc>> {
    let (_, parsed) = x509_parser::parse_x509_certificate(cert.as_ref()).ok()?;
    DateTime::<Utc>::from_timestamp(parsed.validity().not_after.timestamp(), 0)
}

pub(crate) fn write_public_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    write_file_with_mode(path, contents, 0o644)
}

pub(crate) fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    write_file_with_mode(path, contents, 0o600)
}

fn write_file_with_mode(path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;
    Ok(())
}
