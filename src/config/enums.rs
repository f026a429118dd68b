/// Certificate authority used for automatic provisioning.
pub mod acme_provider;

/// Errors raised while loading the configuration file.
pub mod configuration_error;

/// Errors raised while validating the `[server]` section.
pub mod config_validation_error;
