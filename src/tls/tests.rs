#[cfg(test)]
mod tls_tests {
    use std::sync::Arc;
    use rcgen::{CertificateParams, KeyPair};
    use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
    use crate::common::structs::logger::Logger;
    use crate::common::structs::memory_log_sink::MemoryLogSink;
    use crate::config::structs::ssl_config::SslConfig;
    use crate::tls::enums::client_auth_mode::ClientAuthMode;
    use crate::tls::enums::named_curve::NamedCurve;
    use crate::tls::enums::renegotiation_policy::RenegotiationPolicy;
    use crate::tls::enums::server_certificate::ServerCertificate;
    use crate::tls::enums::tls_option_error::TlsOptionError;
    use crate::tls::enums::tls_version::TlsVersion;
    use crate::tls::tls::{
        build_negotiated_options,
        cipher_suite_id,
        cipher_suite_name,
        effective_versions,
        parse_client_auth,
        parse_curve,
        parse_tls_version,
        CIPHER_SUITES,
    };

    fn test_logger() -> (Logger, Arc<MemoryLogSink>) {
        let sink = Arc::new(MemoryLogSink::new());
        (Logger::with_sink("gatehouse::tls", sink.clone()), sink)
    }

    fn test_certificate() -> ServerCertificate {
        let key_pair = KeyPair::generate().unwrap();
        let cert = CertificateParams::new(vec![String::from("localhost")]).unwrap()
            .self_signed(&key_pair).unwrap();
        ServerCertificate::Single {
            chain: vec![CertificateDer::from(cert.der().to_vec())],
            key: PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der())),
        }
    }

    #[test]
    fn test_parse_tls_version_spellings() {
        assert_eq!(parse_tls_version("1.2", TlsVersion::Tls13).unwrap(), TlsVersion::Tls12);
        assert_eq!(parse_tls_version("TLS1.3", TlsVersion::Tls12).unwrap(), TlsVersion::Tls13);
        assert_eq!(parse_tls_version("tls1.0", TlsVersion::Tls12).unwrap(), TlsVersion::Tls10);
        assert_eq!(parse_tls_version("", TlsVersion::Tls12).unwrap(), TlsVersion::Tls12);
        assert!(matches!(parse_tls_version("1.4", TlsVersion::Tls12), Err(TlsOptionError::UnsupportedVersion(_))));
        assert!(parse_tls_version("ssl3", TlsVersion::Tls12).is_err());
    }

    #[test]
    fn test_version_wire_ids_are_ordered() {
        let ids: Vec<u16> = TlsVersion::ALL.iter().map(|version| version.wire_id()).collect();
        assert_eq!(ids, vec![0x0301, 0x0302, 0x0303, 0x0304]);
        assert!(TlsVersion::Tls10 < TlsVersion::Tls13);
    }

    #[test]
    fn test_effective_versions() {
        assert_eq!(effective_versions(TlsVersion::Tls10, TlsVersion::Tls13).unwrap(), vec![TlsVersion::Tls12, TlsVersion::Tls13]);
        assert_eq!(effective_versions(TlsVersion::Tls13, TlsVersion::Tls13).unwrap(), vec![TlsVersion::Tls13]);
        assert!(matches!(effective_versions(TlsVersion::Tls10, TlsVersion::Tls11), Err(TlsOptionError::NoSupportedVersion { .. })));
    }

    #[test]
    fn test_cipher_table_lookup() {
        assert_eq!(cipher_suite_id("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256").unwrap(), 0xC02F);
        assert_eq!(cipher_suite_id("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305").unwrap(), 0xCCA9);
        assert_eq!(cipher_suite_name(0x002F), Some("TLS_RSA_WITH_AES_128_CBC_SHA"));
        assert!(matches!(cipher_suite_id("tls_ecdhe_rsa_with_aes_128_gcm_sha256"), Err(TlsOptionError::UnsupportedCipherSuite(_))));
        assert_eq!(CIPHER_SUITES.len(), 10);
    }

    #[test]
    fn test_curve_lookup() {
        assert_eq!(parse_curve("X25519").unwrap(), NamedCurve::X25519);
        assert_eq!(parse_curve("P521").unwrap(), NamedCurve::P521);
        assert!(matches!(parse_curve("P224"), Err(TlsOptionError::UnsupportedCurve(_))));
    }

    #[test]
    fn test_client_auth_aliases() {
        assert_eq!(parse_client_auth("").unwrap(), ClientAuthMode::None);
        assert_eq!(parse_client_auth("no_client_cert").unwrap(), ClientAuthMode::None);
        assert_eq!(parse_client_auth("request_client_cert").unwrap(), ClientAuthMode::Request);
        assert_eq!(parse_client_auth("require-any").unwrap(), ClientAuthMode::RequireAny);
        assert_eq!(parse_client_auth("VERIFY_CLIENT_CERT_IF_GIVEN").unwrap(), ClientAuthMode::VerifyIfGiven);
        assert_eq!(parse_client_auth("require_and_verify_client_cert").unwrap(), ClientAuthMode::RequireAndVerify);
        assert!(matches!(parse_client_auth("sometimes"), Err(TlsOptionError::UnsupportedClientAuth(_))));
    }

    #[test]
    fn test_build_defaults() {
        let (logger, _) = test_logger();
        let options = build_negotiated_options(&SslConfig::default(), &logger).unwrap();
        assert_eq!(options.min_version(), TlsVersion::Tls12);
        assert_eq!(options.max_version(), TlsVersion::Tls13);
        assert!(options.cipher_suites().is_empty());
        assert_eq!(options.client_auth(), ClientAuthMode::None);
        assert_eq!(options.renegotiation(), RenegotiationPolicy::Never);
        assert!(options.client_ca_pool().is_none());
    }

    #[test]
    fn test_build_rejects_inverted_range() {
        let (logger, _) = test_logger();
        let ssl = SslConfig {
            min_version: String::from("1.3"),
            max_version: String::from("1.2"),
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&ssl, &logger), Err(TlsOptionError::VersionRange { .. })));
    }

    #[test]
    fn test_build_unknown_cipher_is_hard_error() {
        let (logger, _) = test_logger();
        let ssl = SslConfig {
            cipher_suites: vec![String::from("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"), String::from("TLS_NULL")],
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&ssl, &logger), Err(TlsOptionError::UnsupportedCipherSuite(name)) if name == "TLS_NULL"));
    }

    #[test]
    fn test_build_drops_cbc_suites_with_warning() {
        let (logger, sink) = test_logger();
        let ssl = SslConfig {
            cipher_suites: vec![String::from("TLS_RSA_WITH_AES_128_CBC_SHA"), String::from("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256")],
            ..SslConfig::default()
        };
        let options = build_negotiated_options(&ssl, &logger).unwrap();
        assert_eq!(options.cipher_suites(), &[0x002F, 0xC02B]);
        assert_eq!(sink.count(log::Level::Warn, "TLS_RSA_WITH_AES_128_CBC_SHA"), 1);
        let tls12_ids: Vec<u16> = options.crypto_provider().cipher_suites.iter()
            .filter(|suite| !matches!(suite, rustls::SupportedCipherSuite::Tls13(_)))
            .map(|suite| u16::from(suite.suite()))
            .collect();
        assert_eq!(tls12_ids, vec![0xC02B]);
    }

    #[test]
    fn test_build_tls12_only_with_cbc_only_fails() {
        let (logger, _) = test_logger();
        let ssl = SslConfig {
            max_version: String::from("1.2"),
            cipher_suites: vec![String::from("TLS_RSA_WITH_AES_256_CBC_SHA")],
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&ssl, &logger), Err(TlsOptionError::NoUsableCipherSuite)));
    }

    #[test]
    fn test_build_curves() {
        let (logger, sink) = test_logger();
        let ssl = SslConfig {
            curve_preferences: vec![String::from("P384"), String::from("P521"), String::from("X25519")],
            ..SslConfig::default()
        };
        let options = build_negotiated_options(&ssl, &logger).unwrap();
        let groups: Vec<rustls::NamedGroup> = options.crypto_provider().kx_groups.iter().map(|group| group.name()).collect();
        assert_eq!(groups, vec![rustls::NamedGroup::secp384r1, rustls::NamedGroup::X25519]);
        assert_eq!(sink.count(log::Level::Warn, "P521"), 1);

        let only_p521 = SslConfig {
            curve_preferences: vec![String::from("P521")],
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&only_p521, &logger), Err(TlsOptionError::NoUsableCurve)));
    }

    #[test]
    fn test_verifying_modes_need_ca() {
        let (logger, _) = test_logger();
        let ssl = SslConfig {
            client_auth: String::from("require-and-verify"),
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&ssl, &logger), Err(TlsOptionError::MissingClientCa(ClientAuthMode::RequireAndVerify))));
    }

    #[test]
    fn test_malformed_ca_file_is_hard_error() {
        let (logger, _) = test_logger();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ca.pem");
        std::fs::write(&path, "not a certificate").unwrap();
        let ssl = SslConfig {
            client_auth: String::from("verify-if-given"),
            client_ca_cert: path.to_string_lossy().to_string(),
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&ssl, &logger), Err(TlsOptionError::ClientCaParse(_))));

        let missing = SslConfig {
            client_auth: String::from("request"),
            client_ca_cert: dir.path().join("missing.pem").to_string_lossy().to_string(),
            ..SslConfig::default()
        };
        assert!(matches!(build_negotiated_options(&missing, &logger), Err(TlsOptionError::ClientCaRead { .. })));
    }

    #[test]
    fn test_ca_pool_is_attached_and_verifier_builds() {
        let (logger, _) = test_logger();
        let dir = tempfile::tempdir().unwrap();
        let ca_key = KeyPair::generate().unwrap();
        let mut params = CertificateParams::new(vec![String::from("client-ca")]).unwrap();
        params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
        let ca = params.self_signed(&ca_key).unwrap();
        let path = dir.path().join("ca.pem");
        std::fs::write(&path, ca.pem()).unwrap();

        let ssl = SslConfig {
            client_auth: String::from("require_and_verify_client_cert"),
            client_ca_cert: path.to_string_lossy().to_string(),
            ..SslConfig::default()
        };
        let options = build_negotiated_options(&ssl, &logger).unwrap();
        assert_eq!(options.client_ca_pool().unwrap().len(), 1);
        let verifier = options.client_verifier().unwrap();
        assert!(verifier.offer_client_auth());
        assert!(verifier.client_auth_mandatory());
    }

    #[test]
    fn test_request_mode_verifier_is_optional() {
        let (logger, _) = test_logger();
        let ssl = SslConfig {
            client_auth: String::from("request"),
            ..SslConfig::default()
        };
        let options = build_negotiated_options(&ssl, &logger).unwrap();
        let verifier = options.client_verifier().unwrap();
        assert!(verifier.offer_client_auth());
        assert!(!verifier.client_auth_mandatory());
    }

    #[test]
    fn test_server_config_alpn_and_renegotiation_note() {
        let (logger, sink) = test_logger();
        let ssl = SslConfig {
            renegotiation: true,
            ..SslConfig::default()
        };
        let options = build_negotiated_options(&ssl, &logger).unwrap();
        assert_eq!(options.renegotiation(), RenegotiationPolicy::OnceAsClient);
        let config = options.server_config(test_certificate(), &logger).unwrap();
        assert_eq!(config.alpn_protocols, vec![b"h2".to_vec(), b"http/1.1".to_vec()]);
        assert!(sink.contains("renegotiation"));
    }
}
