use std::net::SocketAddr;
use std::time::Duration;
use crate::common::common::{parse_duration, resolve_bind_address};
use crate::config::enums::acme_provider::AcmeProvider;
use crate::config::enums::config_validation_error::ConfigValidationError;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::config::structs::ssl_config::SslConfig;

/// Empty values fall back to `default`, anything else must parse.
pub fn parse_duration_field(field: &'static str, value: &str, default: &str) -> Result<Duration, ConfigValidationError> {
    let effective = if value.trim().is_empty() { default } else { value };
    parse_duration(effective).map_err(|error| ConfigValidationError::InvalidDuration {
        field,
        value: value.to_string(),
        reason: error.to_string(),
    })
}

pub fn parse_address_field(field: &'static str, value: &str, default: &str) -> Result<SocketAddr, ConfigValidationError> {
    let effective = if value.trim().is_empty() { default } else { value };
    resolve_bind_address(effective).map_err(|error| ConfigValidationError::InvalidAddress {
        field,
        value: value.to_string(),
        reason: error.to_string(),
    })
}

/// Validates the raw `[server]` section and resolves every duration and address.
pub fn parse_server_config(raw: &ServerConfig, environment: &str) -> Result<ParsedServerConfig, ConfigValidationError> {
    let read_timeout = parse_duration_field("server.read_timeout", &raw.read_timeout, ServerConfig::DEFAULT_READ_TIMEOUT)?;
    let write_timeout = parse_duration_field("server.write_timeout", &raw.write_timeout, ServerConfig::DEFAULT_WRITE_TIMEOUT)?;
    let idle_timeout = parse_duration_field("server.idle_timeout", &raw.idle_timeout, ServerConfig::DEFAULT_IDLE_TIMEOUT)?;
    let shutdown_timeout = parse_duration_field(
        "server.shutdown_timeout",
        &raw.shutdown_timeout,
        ServerConfig::DEFAULT_SHUTDOWN_TIMEOUT,
    )?;

    let address = parse_address_field("server.address", &raw.address, ServerConfig::DEFAULT_ADDRESS)?;
    let ssl_address = parse_address_field("server.ssl.address", &raw.ssl.address, SslConfig::DEFAULT_ADDRESS)?;
    let challenge_address = parse_address_field(
        "server.ssl.auto_ssl_challenge_addr",
        &raw.ssl.auto_ssl_challenge_addr,
        SslConfig::DEFAULT_CHALLENGE_ADDRESS,
    )?;

    let acme_provider = raw.ssl.auto_ssl_provider.parse::<AcmeProvider>()?;

    Ok(ParsedServerConfig {
        raw: raw.clone(),
        environment: environment.to_string(),
        address,
        ssl_address,
        challenge_address,
        read_timeout,
        write_timeout,
        idle_timeout,
        shutdown_timeout,
        acme_provider,
    })
}
