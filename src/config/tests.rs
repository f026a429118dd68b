#[cfg(test)]
mod config_tests {
    use std::collections::HashMap;
    use std::time::Duration;
    use crate::config::enums::acme_provider::AcmeProvider;
    use crate::config::enums::config_validation_error::ConfigValidationError;
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::server_config::ServerConfig;

    #[test]
    fn test_defaults_parse() {
        let parsed = ServerConfig::default().parse("production").unwrap();
        assert_eq!(parsed.read_timeout(), Duration::from_secs(5));
        assert_eq!(parsed.write_timeout(), Duration::from_secs(10));
        assert_eq!(parsed.idle_timeout(), Duration::from_secs(120));
        assert_eq!(parsed.shutdown_timeout(), Duration::from_secs(15));
        assert_eq!(parsed.address().port(), 80);
        assert_eq!(parsed.ssl_address().port(), 443);
        assert_eq!(parsed.challenge_address().port(), 80);
        assert_eq!(parsed.acme_provider(), AcmeProvider::LetsEncrypt);
        assert!(!parsed.is_development());
    }

    #[test]
    fn test_empty_durations_fall_back_to_defaults() {
        let raw = ServerConfig {
            read_timeout: String::new(),
            write_timeout: String::new(),
            idle_timeout: String::new(),
            ..ServerConfig::default()
        };
        let parsed = raw.parse("development").unwrap();
        assert_eq!(parsed.read_timeout(), Duration::from_secs(5));
        assert_eq!(parsed.write_timeout(), Duration::from_secs(10));
        assert_eq!(parsed.idle_timeout(), Duration::from_secs(120));
        assert!(parsed.is_development());
    }

    #[test]
    fn test_user_durations_win() {
        let raw = ServerConfig {
            read_timeout: String::from("1m30s"),
            ..ServerConfig::default()
        };
        assert_eq!(raw.parse("production").unwrap().read_timeout(), Duration::from_secs(90));
    }

    #[test]
    fn test_malformed_duration_names_field() {
        let raw = ServerConfig {
            write_timeout: String::from("ten seconds"),
            ..ServerConfig::default()
        };
        let error = raw.parse("production").unwrap_err();
        assert!(matches!(error, ConfigValidationError::InvalidDuration { field: "server.write_timeout", .. }));
        assert!(error.to_string().contains("server.write_timeout"));
    }

    #[test]
    fn test_go_style_address() {
        let mut raw = ServerConfig::default();
        raw.address = String::from(":8080");
        raw.ssl.address = String::from("127.0.0.1:8443");
        let parsed = raw.parse("production").unwrap();
        assert_eq!(parsed.address().to_string(), "0.0.0.0:8080");
        assert_eq!(parsed.ssl_address().to_string(), "127.0.0.1:8443");
    }

    #[test]
    fn test_bad_address_rejected() {
        let mut raw = ServerConfig::default();
        raw.ssl.auto_ssl_challenge_addr = String::from(":99999");
        let error = raw.parse("production").unwrap_err();
        assert!(matches!(error, ConfigValidationError::InvalidAddress { field: "server.ssl.auto_ssl_challenge_addr", .. }));
    }

    #[test]
    fn test_acme_provider_parsing() {
        assert_eq!("".parse::<AcmeProvider>().unwrap(), AcmeProvider::LetsEncrypt);
        assert_eq!("ZeroSSL".parse::<AcmeProvider>().unwrap(), AcmeProvider::ZeroSsl);
        assert!(matches!("buypass".parse::<AcmeProvider>(), Err(ConfigValidationError::UnknownAcmeProvider(_))));
        assert_eq!(AcmeProvider::ZeroSsl.directory_url(), "https://acme.zerossl.com/v2/DV90");
        assert!(AcmeProvider::ZeroSsl.requires_external_account());
        assert!(!AcmeProvider::LetsEncrypt.requires_external_account());
    }

    #[test]
    fn test_auto_ssl_requires_ssl_enabled() {
        let mut raw = ServerConfig::default();
        raw.ssl.auto_ssl = true;
        raw.redirect_to_https = true;
        let parsed = raw.parse("production").unwrap();
        assert!(!parsed.auto_ssl_enabled());
        assert!(!parsed.redirect_to_https());
    }

    #[test]
    fn test_configuration_toml_roundtrip_of_defaults() {
        let config = Configuration::init();
        let serialized = config.to_toml().unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(loaded.server, config.server);
        assert_eq!(loaded.environment, "production");
    }

    #[test]
    fn test_partial_configuration_gets_defaults() {
        let loaded = Configuration::load(b"environment = \"development\"\n[server.ssl]\nenabled = true\n").unwrap();
        assert!(loaded.is_development());
        assert_eq!(loaded.log_level, "info");
        assert!(loaded.server.ssl.enabled);
        assert_eq!(loaded.server.ssl.address, "0.0.0.0:443");
        assert_eq!(loaded.server.address, "0.0.0.0:80");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Configuration::init();
        let vars: HashMap<&str, &str> = HashMap::from([
            (Configuration::ENV_ENVIRONMENT, "development"),
            (Configuration::ENV_LOG_LEVEL, ""),
        ]);
        config.apply_overrides(|name| vars.get(name).map(|value| value.to_string()));
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
    }
}
