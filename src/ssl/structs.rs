/// ACME certificate manager with its caches.
pub mod acme_cert_manager;

/// SNI resolver backed by the ACME manager.
pub mod acme_certificate_resolver;

/// Certificate chain and key loaded from PEM files.
pub mod certificate_bundle;

/// Running HTTP-01 challenge listener.
pub mod challenge_server_handle;

/// ZeroSSL External Account Binding credentials.
pub mod external_account_binding;

/// Certificate issued through ACME.
pub mod issued_certificate;

/// Files written by the self-signed generator.
pub mod self_signed_certificate;
