/// Parsing and directory lookup for `AcmeProvider`.
pub mod acme_provider;

/// Loading, saving and environment overrides for `Configuration`.
pub mod configuration;

/// Display and Error impls for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for `ServerConfig`.
pub mod server_config;

/// Defaults for `SslConfig`.
pub mod ssl_config;

/// Accessors for `ParsedServerConfig`.
pub mod parsed_server_config;
