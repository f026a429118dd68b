pub mod acme_cert_manager;
pub mod acme_certificate_resolver;
pub mod certificate_bundle;
pub mod certificate_state;
pub mod certificate_strategy;
pub mod challenge_server_handle;
pub mod external_account_binding;
pub mod issued_certificate;
