mod common;

use gatehouse::config::config::parse_server_config;
use gatehouse::config::structs::configuration::Configuration;
use gatehouse::ssl::enums::certificate_strategy::CertificateStrategy;
use gatehouse::ssl::enums::provisioning_error::ProvisioningError;
use gatehouse::ssl::ssl::{
    generate_self_signed_certificate,
    provision_certificates,
    validate_acme_config,
    SELF_SIGNED_CERT_FILE,
    SELF_SIGNED_KEY_FILE
};

#[test]
fn test_self_signed_never_written_outside_development() {
    let (logger, _sink) = common::test_logger();
    let dir = tempfile::tempdir().unwrap();
    let result = generate_self_signed_certificate("production", dir.path(), &logger);
    let error = result.unwrap_err();
    assert!(error.to_string().contains("development"));
    assert!(!dir.path().join(SELF_SIGNED_CERT_FILE).exists());
    assert!(!dir.path().join(SELF_SIGNED_KEY_FILE).exists());
}

#[test]
fn test_development_without_files_provisions_self_signed() {
    let (logger, _sink) = common::test_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = common::create_self_signed_config(&dir);
    let parsed = parse_server_config(&config.server, &config.environment).unwrap();

    let state = provision_certificates(&parsed, &logger).unwrap();
    assert_eq!(state.strategy(), CertificateStrategy::SelfSigned);
    assert!(dir.path().join(SELF_SIGNED_CERT_FILE).exists());
    assert!(dir.path().join(SELF_SIGNED_KEY_FILE).exists());
}

#[test]
fn test_zerossl_credentials_checked_before_manager() {
    let mut config = Configuration::init();
    config.server.ssl.enabled = true;
    config.server.ssl.auto_ssl = true;
    config.server.ssl.auto_ssl_domains = vec![String::from("example.com")];
    config.server.ssl.auto_ssl_provider = String::from("zerossl");
    let parsed = parse_server_config(&config.server, &config.environment).unwrap();

    let error = validate_acme_config(parsed.ssl(), parsed.acme_provider()).unwrap_err();
    assert!(matches!(error, ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_eab_key")));

    config.server.ssl.auto_ssl_zerossl_eab_key = String::from("c2VjcmV0");
    let parsed = parse_server_config(&config.server, &config.environment).unwrap();
    let error = validate_acme_config(parsed.ssl(), parsed.acme_provider()).unwrap_err();
    assert!(matches!(error, ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_kid")));

    config.server.ssl.auto_ssl_zerossl_kid = String::from("kid");
    let parsed = parse_server_config(&config.server, &config.environment).unwrap();
    assert!(validate_acme_config(parsed.ssl(), parsed.acme_provider()).is_ok());
}
