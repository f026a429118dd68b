/// Client certificate policy.
pub mod client_auth_mode;

/// Supported elliptic curves.
pub mod named_curve;

/// Renegotiation policy.
pub mod renegotiation_policy;

/// Certificate source handed to the rustls config.
pub mod server_certificate;

/// TLS option errors.
pub mod tls_option_error;

/// Protocol versions.
pub mod tls_version;
