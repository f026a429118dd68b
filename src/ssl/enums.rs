/// PEM loading errors.
pub mod certificate_error;

/// Active certificate source.
pub mod certificate_state;

/// Strategy chosen from the configuration.
pub mod certificate_strategy;

/// Provisioning errors.
pub mod provisioning_error;
