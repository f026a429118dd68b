use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use rustls::crypto::{ring, CryptoProvider, SupportedKxGroup};
use rustls::{RootCertStore, SupportedCipherSuite};
use crate::common::structs::logger::Logger;
use crate::config::structs::ssl_config::SslConfig;
use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::named_curve::NamedCurve;
use crate::tls::enums::renegotiation_policy::RenegotiationPolicy;
use crate::tls::enums::tls_option_error::TlsOptionError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::negotiated_tls_options::NegotiatedTlsOptions;

pub const DEFAULT_MIN_VERSION: TlsVersion = TlsVersion::Tls12;
pub const DEFAULT_MAX_VERSION: TlsVersion = TlsVersion::Tls13;

/// Cipher suite names accepted in `server.ssl.cipher_suites`, with their IANA ids.
pub const CIPHER_SUITES: [(&str, u16); 10] = [
    ("TLS_RSA_WITH_AES_128_CBC_SHA", 0x002F),
    ("TLS_RSA_WITH_AES_256_CBC_SHA", 0x0035),
    ("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA", 0xC009),
    ("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA", 0xC00A),
    ("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA", 0xC013),
    ("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA", 0xC014),
    ("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256", 0xC02F),
    ("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256", 0xC02B),
    ("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305", 0xCCA8),
    ("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305", 0xCCA9),
];

pub const CURVES: [(&str, NamedCurve); 4] = [
    ("P256", NamedCurve::P256),
    ("P384", NamedCurve::P384),
    ("P521", NamedCurve::P521),
    ("X25519", NamedCurve::X25519),
];

/// Accepts `"1.2"` and `"tls1.2"` in any case. Empty selects `default`.
pub fn parse_tls_version(value: &str, default: TlsVersion) -> Result<TlsVersion, TlsOptionError> {
    match value.to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1.0" | "tls1.0" => Ok(TlsVersion::Tls10),
        "1.1" | "tls1.1" => Ok(TlsVersion::Tls11),
        "1.2" | "tls1.2" => Ok(TlsVersion::Tls12),
        "1.3" | "tls1.3" => Ok(TlsVersion::Tls13),
        _ => Err(TlsOptionError::UnsupportedVersion(value.to_string())),
    }
}

pub fn cipher_suite_id(name: &str) -> Result<u16, TlsOptionError> {
    CIPHER_SUITES.iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| *id)
        .ok_or_else(|| TlsOptionError::UnsupportedCipherSuite(name.to_string()))
}

pub fn cipher_suite_name(id: u16) -> Option<&'static str> {
    CIPHER_SUITES.iter()
        .find(|(_, known)| *known == id)
        .map(|(name, _)| *name)
}

/// Any unknown name fails the whole list.
pub fn parse_cipher_suites(names: &[String]) -> Result<Vec<u16>, TlsOptionError> {
    names.iter().map(|name| cipher_suite_id(name)).collect()
}

pub fn parse_curve(name: &str) -> Result<NamedCurve, TlsOptionError> {
    CURVES.iter()
        .find(|(known, _)| *known == name)
        .map(|(_, curve)| *curve)
        .ok_or_else(|| TlsOptionError::UnsupportedCurve(name.to_string()))
}

pub fn parse_curves(names: &[String]) -> Result<Vec<NamedCurve>, TlsOptionError> {
    names.iter().map(|name| parse_curve(name)).collect()
}

pub fn parse_client_auth(value: &str) -> Result<ClientAuthMode, TlsOptionError> {
    match value.to_ascii_lowercase().as_str() {
        "" | "none" | "no_client_cert" => Ok(ClientAuthMode::None),
        "request" | "request_client_cert" => Ok(ClientAuthMode::Request),
        "require-any" | "require_any_client_cert" => Ok(ClientAuthMode::RequireAny),
        "verify-if-given" | "verify_client_cert_if_given" => Ok(ClientAuthMode::VerifyIfGiven),
        "require-and-verify" | "require_and_verify_client_cert" => Ok(ClientAuthMode::RequireAndVerify),
        _ => Err(TlsOptionError::UnsupportedClientAuth(value.to_string())),
    }
}

pub fn load_client_ca_pool(path: &str) -> Result<RootCertStore, TlsOptionError> {
    let file = File::open(path).map_err(|source| TlsOptionError::ClientCaRead {
        path: path.to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsOptionError::ClientCaRead {
            path: path.to_string(),
            source,
        })?;

    let mut roots = RootCertStore::empty();
    let (added, _ignored) = roots.add_parsable_certificates(certs);
    if added == 0 {
        return Err(TlsOptionError::ClientCaParse(path.to_string()));
    }
    Ok(roots)
}

/// Versions in `[min, max]` that rustls can actually serve.
pub fn effective_versions(min: TlsVersion, max: TlsVersion) -> Result<Vec<TlsVersion>, TlsOptionError> {
    let versions: Vec<TlsVersion> = TlsVersion::ALL.into_iter()
        .filter(|version| *version >= min && *version <= max)
        .filter(|version| version.rustls_version().is_some())
        .collect();
    if versions.is_empty() {
        return Err(TlsOptionError::NoSupportedVersion { min, max });
    }
    Ok(versions)
}

/// Narrows the `ring` provider to the configured TLS 1.2 suites and key exchange groups.
pub fn narrow_crypto_provider(
    versions: &[TlsVersion],
    cipher_suites: &[u16],
    curves: &[NamedCurve],
    logger: &Logger,
) -> Result<CryptoProvider, TlsOptionError> {
    let mut provider = ring::default_provider();

    if !cipher_suites.is_empty() {
        for id in cipher_suites {
            let available = provider.cipher_suites.iter().any(|suite| u16::from(suite.suite()) == *id);
            if !available {
                logger.warn(format!(
                    "[TLS] Cipher suite {} cannot be negotiated by this TLS backend, skipping",
                    cipher_suite_name(*id).unwrap_or("unknown")
                ));
            }
        }
        provider.cipher_suites.retain(|suite| {
            matches!(suite, SupportedCipherSuite::Tls13(_)) || cipher_suites.contains(&u16::from(suite.suite()))
        });

        let has_tls12_suite = provider.cipher_suites.iter().any(|suite| !matches!(suite, SupportedCipherSuite::Tls13(_)));
        if !has_tls12_suite {
            if !versions.contains(&TlsVersion::Tls13) {
                return Err(TlsOptionError::NoUsableCipherSuite);
            }
            if versions.contains(&TlsVersion::Tls12) {
                logger.warn("[TLS] No configured cipher suite is usable with TLS 1.2, only TLS 1.3 handshakes will succeed");
            }
        }
        if !versions.contains(&TlsVersion::Tls12) {
            logger.info("[TLS] cipher_suites only applies to TLS 1.2 and is ignored for TLS 1.3");
        }
    }

    if !curves.is_empty() {
        let mut groups: Vec<&'static dyn SupportedKxGroup> = Vec::with_capacity(curves.len());
        for curve in curves {
            match provider.kx_groups.iter().find(|group| group.name() == curve.named_group()) {
                Some(group) => groups.push(*group),
                None => logger.warn(format!("[TLS] Curve {} is not available in this TLS backend, skipping", curve)),
            }
        }
        if groups.is_empty() {
            return Err(TlsOptionError::NoUsableCurve);
        }
        provider.kx_groups = groups;
    }

    Ok(provider)
}

/// Builds the negotiated TLS parameter set from `[server.ssl]`.
///
/// Every name is resolved and every range checked here, so a listener never
/// sees an invalid combination.
pub fn build_negotiated_options(ssl: &SslConfig, logger: &Logger) -> Result<NegotiatedTlsOptions, TlsOptionError> {
    let min_version = parse_tls_version(&ssl.min_version, DEFAULT_MIN_VERSION)?;
    let max_version = parse_tls_version(&ssl.max_version, DEFAULT_MAX_VERSION)?;
    if min_version > max_version {
        return Err(TlsOptionError::VersionRange { min: min_version, max: max_version });
    }
    let versions = effective_versions(min_version, max_version)?;
    if min_version < TlsVersion::Tls12 {
        logger.warn(format!("[TLS] {} is not available, serving {} and up", min_version, versions[0]));
    }

    let cipher_suites = parse_cipher_suites(&ssl.cipher_suites)?;
    let curve_preferences = parse_curves(&ssl.curve_preferences)?;
    let client_auth = parse_client_auth(&ssl.client_auth)?;

    let client_ca_pool = if client_auth != ClientAuthMode::None && !ssl.client_ca_cert.is_empty() {
        Some(Arc::new(load_client_ca_pool(&ssl.client_ca_cert)?))
    } else {
        None
    };
    if client_auth.verifies_chain() && client_ca_pool.is_none() {
        return Err(TlsOptionError::MissingClientCa(client_auth));
    }

    let crypto_provider = narrow_crypto_provider(&versions, &cipher_suites, &curve_preferences, logger)?;

    Ok(NegotiatedTlsOptions {
        min_version,
        max_version,
        cipher_suites,
        curve_preferences,
        client_auth,
        renegotiation: RenegotiationPolicy::from(ssl.renegotiation),
        client_ca_pool,
        crypto_provider: Arc::new(crypto_provider),
    })
}
