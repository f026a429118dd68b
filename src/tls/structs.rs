/// Verifier for the `request` and `require-any` client-auth modes.
pub mod any_client_cert_verifier;

/// The validated TLS parameter set.
pub mod negotiated_tls_options;
