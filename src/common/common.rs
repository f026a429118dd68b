use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{}'", level))),
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("actix_server", log::LevelFilter::Warn)
        .level_for("rustls", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {}", err)));
    }
    info!("logging initialized.");
    Ok(())
}

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

fn duration_unit(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parses duration strings such as `"250ms"`, `"1m30s"` or `"1.5h"`.
///
/// A bare `"0"` is accepted, every other number needs a unit. Negative values are rejected.
pub fn parse_duration(value: &str) -> Result<Duration, CustomError> {
    let invalid = |reason: &str| CustomError::new(&format!("invalid duration \"{}\": {}", value, reason));

    let mut rest = value.trim();
    if rest.is_empty() {
        return Err(invalid("empty value"));
    }
    if rest.starts_with('-') {
        return Err(invalid("negative durations are not allowed"));
    }
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid("missing number"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let integer_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (integer, after_integer) = rest.split_at(integer_len);
        let (fraction, after_number) = match after_integer.strip_prefix('.') {
            Some(tail) => {
                let fraction_len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
                tail.split_at(fraction_len)
            }
            None => ("", after_integer),
        };
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a number"));
        }

        let unit_len = after_number.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(after_number.len());
        let (unit_name, remainder) = after_number.split_at(unit_len);
        if unit_name.is_empty() {
            return Err(invalid("missing unit"));
        }
        let unit = duration_unit(unit_name).ok_or_else(|| invalid(&format!("unknown unit \"{}\"", unit_name)))?;

        let whole: u128 = if integer.is_empty() {
            0
        } else {
            integer.parse::<u128>().map_err(|_| invalid("number out of range"))?
        };
        let mut nanos = whole.checked_mul(unit).ok_or_else(|| invalid("number out of range"))?;
        if !fraction.is_empty() {
            let scale = 10u128.checked_pow(fraction.len() as u32).ok_or_else(|| invalid("fraction too long"))?;
            let digits = fraction.parse::<u128>().map_err(|_| invalid("fraction too long"))?;
            nanos += digits.checked_mul(unit).ok_or_else(|| invalid("number out of range"))? / scale;
        }
        total = total.checked_add(nanos).ok_or_else(|| invalid("number out of range"))?;
        rest = remainder;
    }

    let seconds = u64::try_from(total / SECOND).map_err(|_| invalid("number out of range"))?;
    Ok(Duration::new(seconds, (total % SECOND) as u32))
}

/// Resolves `":8443"` to every interface, otherwise `host:port` through the system resolver.
pub fn resolve_bind_address(value: &str) -> Result<SocketAddr, CustomError> {
    let value = value.trim();
    if let Some(port) = value.strip_prefix(':') {
        let port = port.parse::<u16>()
            .map_err(|_| CustomError::new(&format!("invalid port in address \"{}\"", value)))?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }
    if let Ok(address) = value.parse::<SocketAddr>() {
        return Ok(address);
    }
    match value.to_socket_addrs() {
        Ok(mut addresses) => addresses.next()
            .ok_or_else(|| CustomError::new(&format!("address \"{}\" did not resolve", value))),
        Err(error) => Err(CustomError::new(&format!("invalid address \"{}\": {}", value, error))),
    }
}

/// Strips an optional port from a `Host` header value, keeping IPv6 brackets.
pub fn host_without_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

pub fn https_redirect_location(host: &str, path_and_query: &str, https_port: u16) -> String {
    let host = host_without_port(host);
    let path = if path_and_query.is_empty() { "/" } else { path_and_query };
    if https_port == 443 {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}:{}{}", host, https_port, path)
    }
}

/// Resolves once `true` is observed. A dropped sender is not a cancellation.
pub async fn wait_for_cancel(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
