pub mod any_client_cert_verifier;
pub mod client_auth_mode;
pub mod named_curve;
pub mod negotiated_tls_options;
pub mod renegotiation_policy;
pub mod server_certificate;
pub mod tls_version;
