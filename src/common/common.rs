use std::collections::HashMap;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into percent-decoded byte values.
///
/// Keys are lower-cased; values are kept as raw bytes since `info_hash` and
/// `peer_id` are binary. Repeated keys accumulate.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw) = query else {
        return Ok(queries);
    };

    for query_item in raw.split('&').filter(|item| !item.is_empty()) {
        let (key_raw, value_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let values = queries.entry(key_name).or_default();
        if let Some(value_raw) = value_raw {
            values.push(percent_encoding::percent_decode_str(value_raw).collect::<Vec<u8>>());
        }
    }

    Ok(queries)
}

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'"))),
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

    fern::Dispatch::new()
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
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;

    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `timeout`, returning early with `true` once shutdown is signalled.
pub async fn shutdown_waiting(timeout: Duration, shutdown: &mut watch::Receiver<bool>) -> bool
{
    if *shutdown.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(timeout) => return false,
        changed = shutdown.changed() => {
            // A dropped sender leaves nobody to keep us running.
            if changed.is_err() {
                return true;
            }
        }
    }
    *shutdown.borrow()
}
