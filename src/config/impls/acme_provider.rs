use std::fmt;
use std::str::FromStr;
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::enums::config_validation_error::ConfigValidationError;

impl AcmeProvider {
    pub const LETS_ENCRYPT_DIRECTORY: &'static str = "https://acme-v02.api.letsencrypt.org/directory";
    pub const ZEROSSL_DIRECTORY: &'static str = "https://acme.zerossl.com/v2/DV90";

    pub fn directory_url(&self) -> &'static str {
        match self {
            AcmeProvider::LetsEncrypt => Self::LETS_ENCRYPT_DIRECTORY,
            AcmeProvider::ZeroSsl => Self::ZEROSSL_DIRECTORY,
        }
    }

    pub fn requires_external_account(&self) -> bool {
        matches!(self, AcmeProvider::ZeroSsl)
    }
}

impl FromStr for AcmeProvider {
    type Err = ConfigValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "letsencrypt" => Ok(AcmeProvider::LetsEncrypt),
            "zerossl" => Ok(AcmeProvider::ZeroSsl),
            _ => Err(ConfigValidationError::UnknownAcmeProvider(value.to_string())),
        }
    }
}

impl fmt::Display for AcmeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcmeProvider::LetsEncrypt => write!(f, "letsencrypt"),
            AcmeProvider::ZeroSsl => write!(f, "zerossl"),
        }
    }
}
