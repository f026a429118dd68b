use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use crate::ssl::structs::issued_certificate::IssuedCertificate;

impl IssuedCertificate {
    pub fn new(certified_key: Arc<rustls::sign::CertifiedKey>, not_after: Option<DateTime<Utc>>) -> IssuedCertificate {
        IssuedCertificate { certified_key, not_after }
    }

    pub fn certified_key(&self) -> Arc<rustls::sign::CertifiedKey> {
        self.certified_key.clone()
    }

    pub fn not_after(&self) -> Option<DateTime<Utc>> {
        self.not_after
    }

    /// Unknown expiry counts as expiring.
    pub fn expires_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        match self.not_after {
            Some(not_after) => not_after - now <= window,
            None => true,
        }
    }
}

impl std::fmt::Debug for IssuedCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedCertificate")
            .field("chain_len", &self.certified_key.cert.len())
            .field("not_after", &self.not_after)
            .finish()
    }
}
