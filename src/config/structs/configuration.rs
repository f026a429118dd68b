use serde::{Deserialize, Serialize};
use crate::config::structs::server_config::ServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    #[serde(default = "Configuration::default_environment")]
    pub environment: String,
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: ServerConfig,
}
