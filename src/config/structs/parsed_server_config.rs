use std::net::SocketAddr;
use std::time::Duration;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::structs::server_config::ServerConfig;

/// Built once by `parse_server_config` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ParsedServerConfig {
    pub(crate) raw: ServerConfig,
    pub(crate) environment: String,
    pub(crate) address: SocketAddr,
    pub(crate) ssl_address: SocketAddr,
    pub(crate) challenge_address: SocketAddr,
    pub(crate) read_timeout: Duration,
    pub(crate) write_timeout: Duration,
    pub(crate) idle_timeout: Duration,
    pub(crate) shutdown_timeout: Duration,
    pub(crate) acme_provider: AcmeProvider,
}
