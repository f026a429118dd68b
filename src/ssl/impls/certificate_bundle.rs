use std::sync::Arc;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::parse_certificate_expiry;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::tls::enums::server_certificate::ServerCertificate;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs.len())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .field("not_after", &self.not_after)
            .finish()
    }
}

impl CertificateBundle {
    pub fn load_from_files(cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError> {
        let key_pem = std::fs::read(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let cert_pem = std::fs::read(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;

        let certs = Self::parse_certificates(&cert_pem)?;
        let key = Self::parse_private_key(&key_pem)?;
        Ok(CertificateBundle {
            not_after: parse_certificate_expiry(&certs[0]),
            certs,
            key,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn parse_certificates(pem: &[u8]) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut &pem[..])
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if certs.is_empty() {
            return Err(CertificateError::CertParseError(
                "No certificates found in file".to_string(),
            ));
        }
        Ok(certs)
    }

    /// Tries PKCS#8, then PKCS#1 (RSA), then SEC1 (EC).
    pub fn parse_private_key(pem: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
        if let Some(key_result) = rustls_pemfile::pkcs8_private_keys(&mut &pem[..]).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs8)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        if let Some(key_result) = rustls_pemfile::rsa_private_keys(&mut &pem[..]).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        if let Some(key_result) = rustls_pemfile::ec_private_keys(&mut &pem[..]).next() {
            return key_result
                .map(PrivateKeyDer::Sec1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        Err(CertificateError::NoKeyFound)
    }

    pub fn to_certified_key(&self) -> Result<rustls::sign::CertifiedKey, CertificateError> {
        certified_key_from_parts(self.certs.clone(), &self.key)
    }

    pub fn server_certificate(&self) -> ServerCertificate {
        ServerCertificate::Single {
            chain: self.certs.clone(),
            key: self.key.clone_key(),
        }
    }
}

pub(crate) fn certified_key_from_parts(
    certs: Vec<CertificateDer<'static>>,
    key: &PrivateKeyDer<'static>,
) -> Result<rustls::sign::CertifiedKey, CertificateError> {
    let signing_key = rustls::crypto::ring::sign::any_supported_type(key)
        .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
    Ok(rustls::sign::CertifiedKey::new(certs, signing_key))
}

pub(crate) fn shared_certified_key(
    certs: Vec<CertificateDer<'static>>,
    key: &PrivateKeyDer<'static>,
) -> Result<Arc<rustls::sign::CertifiedKey>, CertificateError> {
    certified_key_from_parts(certs, key).map(Arc::new)
}
