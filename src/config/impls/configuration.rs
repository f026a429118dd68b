use std::fs::File;
use std::io::Write;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::server_config::ServerConfig;

impl Configuration {
    pub const ENV_ENVIRONMENT: &'static str = "GATEHOUSE_ENVIRONMENT";
    pub const ENV_LOG_LEVEL: &'static str = "GATEHOUSE_LOG_LEVEL";

    pub fn init() -> Configuration {
        Configuration {
            environment: Self::default_environment(),
            log_level: Self::default_log_level(),
            server: ServerConfig::default(),
        }
    }

    pub(crate) fn default_environment() -> String {
        String::from("production")
    }

    pub(crate) fn default_log_level() -> String {
        String::from("info")
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    /// Applies `GATEHOUSE_ENVIRONMENT` and `GATEHOUSE_LOG_LEVEL` on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(environment) = lookup(Self::ENV_ENVIRONMENT).filter(|value| !value.is_empty()) {
            self.environment = environment;
        }
        if let Some(log_level) = lookup(Self::ENV_LOG_LEVEL).filter(|value| !value.is_empty()) {
            self.log_level = log_level;
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");
                let config_toml = Configuration::init().to_toml()
                    .map_err(|e| CustomError::new(&format!("could not serialize default configuration: {}", e)))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }
}
