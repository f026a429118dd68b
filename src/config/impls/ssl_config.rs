use crate::config::structs::ssl_config::SslConfig;

impl SslConfig {
    pub const DEFAULT_ADDRESS: &'static str = "0.0.0.0:443";
    pub const DEFAULT_CHALLENGE_ADDRESS: &'static str = "0.0.0.0:80";
    pub const DEFAULT_SELF_SIGNED_DIR: &'static str = ".";
}

impl Default for SslConfig {
    fn default() -> Self {
        SslConfig {
            enabled: false,
            address: String::from(Self::DEFAULT_ADDRESS),
            cert_file: String::new(),
            key_file: String::new(),
            min_version: String::from("1.2"),
            max_version: String::from("1.3"),
            cipher_suites: vec![],
            curve_preferences: vec![],
            client_auth: String::from("none"),
            client_ca_cert: String::new(),
            renegotiation: false,
            self_signed_dir: String::from(Self::DEFAULT_SELF_SIGNED_DIR),
            auto_ssl: false,
            auto_ssl_domains: vec![],
            auto_ssl_email: String::new(),
            auto_ssl_cache_dir: String::new(),
            auto_ssl_provider: String::from("letsencrypt"),
            auto_ssl_zerossl_eab_key: String::new(),
            auto_ssl_zerossl_kid: String::new(),
            auto_ssl_challenge_addr: String::from(Self::DEFAULT_CHALLENGE_ADDRESS),
        }
    }
}
