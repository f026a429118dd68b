use crate::config::config::parse_server_config;
use crate::config::enums::config_validation_error::ConfigValidationError;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::config::structs::ssl_config::SslConfig;

impl ServerConfig {
    pub const DEFAULT_ADDRESS: &'static str = "0.0.0.0:80";
    pub const DEFAULT_READ_TIMEOUT: &'static str = "5s";
    pub const DEFAULT_WRITE_TIMEOUT: &'static str = "10s";
    pub const DEFAULT_IDLE_TIMEOUT: &'static str = "120s";
    pub const DEFAULT_SHUTDOWN_TIMEOUT: &'static str = "15s";

    pub fn parse(&self, environment: &str) -> Result<ParsedServerConfig, ConfigValidationError> {
        parse_server_config(self, environment)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: String::from(Self::DEFAULT_ADDRESS),
            redirect_to_https: false,
            read_timeout: String::from(Self::DEFAULT_READ_TIMEOUT),
            write_timeout: String::from(Self::DEFAULT_WRITE_TIMEOUT),
            idle_timeout: String::from(Self::DEFAULT_IDLE_TIMEOUT),
            shutdown_timeout: String::from(Self::DEFAULT_SHUTDOWN_TIMEOUT),
            workers: 0,
            ssl: SslConfig::default(),
        }
    }
}
