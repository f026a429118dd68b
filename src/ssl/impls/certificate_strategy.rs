use std::fmt;
use crate::ssl::enums::certificate_strategy::CertificateStrategy;

impl fmt::Display for CertificateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateStrategy::Manual => write!(f, "manual"),
            CertificateStrategy::SelfSigned => write!(f, "self-signed"),
            CertificateStrategy::Acme => write!(f, "acme"),
        }
    }
}
