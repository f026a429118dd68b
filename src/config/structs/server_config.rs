use serde::{Deserialize, Serialize};
use crate::config::structs::ssl_config::SslConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub redirect_to_https: bool,
    pub read_timeout: String,
    pub write_timeout: String,
    pub idle_timeout: String,
    pub shutdown_timeout: String,
    /// Worker threads per listener, `0` lets actix pick.
    pub workers: usize,
    pub ssl: SslConfig,
}
