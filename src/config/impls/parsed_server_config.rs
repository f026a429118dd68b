use std::net::SocketAddr;
use std::time::Duration;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::config::structs::ssl_config::SslConfig;

impl ParsedServerConfig {
    pub fn raw(&self) -> &ServerConfig {
        &self.raw
    }

    pub fn ssl(&self) -> &SslConfig {
        &self.raw.ssl
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn ssl_address(&self) -> SocketAddr {
        self.ssl_address
    }

    pub fn challenge_address(&self) -> SocketAddr {
        self.challenge_address
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn write_timeout(&self) -> Duration {
        self.write_timeout
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn shutdown_timeout(&self) -> Duration {
        self.shutdown_timeout
    }

    pub fn acme_provider(&self) -> AcmeProvider {
        self.acme_provider
    }

    pub fn ssl_enabled(&self) -> bool {
        self.raw.ssl.enabled
    }

    /// Automatic provisioning only applies when the encrypted listener is on.
    pub fn auto_ssl_enabled(&self) -> bool {
        self.raw.ssl.enabled && self.raw.ssl.auto_ssl
    }

    pub fn redirect_to_https(&self) -> bool {
        self.raw.ssl.enabled && self.raw.redirect_to_https
    }
}
