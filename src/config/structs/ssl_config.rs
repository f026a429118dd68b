use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SslConfig {
    pub enabled: bool,
    pub address: String,
    pub cert_file: String,
    pub key_file: String,
    pub min_version: String,
    pub max_version: String,
    pub cipher_suites: Vec<String>,
    pub curve_preferences: Vec<String>,
    pub client_auth: String,
    pub client_ca_cert: String,
    pub renegotiation: bool,
    pub self_signed_dir: String,
    pub auto_ssl: bool,
    pub auto_ssl_domains: Vec<String>,
    pub auto_ssl_email: String,
    pub auto_ssl_cache_dir: String,
    pub auto_ssl_provider: String,
    pub auto_ssl_zerossl_eab_key: String,
    pub auto_ssl_zerossl_kid: String,
    pub auto_ssl_challenge_addr: String,
}
