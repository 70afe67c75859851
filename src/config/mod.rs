//! Configuration of the ZE07 component: loading, schema checks and validation.
//!
//! A config document is YAML with the component under a top-level `ze07` key.
//! Every option is checked on its own first, so type errors point at the
//! offending key; cross-field rules run afterwards in [`validate`].

mod error;
mod identifier;
mod schema;
mod update_interval;
mod validate;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::constants::keys;

pub use error::{ConfigError, ValidationError};
pub use identifier::Identifier;
pub use schema::{
    ComponentOptions, SensorOptions, SensorTraits, UartDeviceOptions, Ze07Config,
    CO_SENSOR_TRAITS,
};
pub use update_interval::UpdateInterval;
pub use validate::validate;

pub fn from_path(path: impl AsRef<Path>) -> Result<Ze07Config, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading config from {}", path.display());
    from_str(&fs::read_to_string(path)?)
}

pub fn from_str(config_raw: &str) -> Result<Ze07Config, ConfigError> {
    let document: Value = serde_yaml::from_str(config_raw)?;
    let component = document
        .get(keys::COMPONENT)
        .ok_or(ConfigError::MissingComponent)?;
    let raw = from_value(component)?;
    validate(raw).map_err(Into::into)
}

/// Run the per-key schema checks over the component sub-tree.
pub fn from_value(component: &Value) -> Result<Ze07Config, ConfigError> {
    let empty = Mapping::new();
    let mapping = match component {
        Value::Mapping(m) => m,
        // A bare `ze07:` key means all defaults.
        Value::Null => &empty,
        _ => {
            return Err(ConfigError::schema(
                keys::COMPONENT,
                "expected a mapping of options",
            ))
        }
    };

    let mut config = Ze07Config::default();
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| ConfigError::schema(keys::COMPONENT, "option names must be strings"))?;
        let path = option_path(key);
        match key {
            keys::ID => config.id = Some(option(&path, value)?),
            keys::CO => config.co = Some(sensor_options(&path, value)?),
            keys::RX_ONLY => config.rx_only = Some(boolean(&path, value)?),
            keys::UPDATE_INTERVAL => config.update_interval = Some(option(&path, value)?),
            keys::SETUP_PRIORITY => config.component.setup_priority = Some(priority(&path, value)?),
            keys::UART_ID => config.uart.uart_id = Some(option(&path, value)?),
            _ => return Err(ConfigError::schema(path, "extra keys not allowed")),
        }
    }
    Ok(config)
}

fn option<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T, ConfigError> {
    serde_yaml::from_value(value.clone()).map_err(|e| ConfigError::schema(path, e))
}

fn option_path(key: &str) -> String {
    format!("{}.{}", keys::COMPONENT, key)
}

/// The sensor's own ID is checked first so a bad name points at `co.id`.
fn sensor_options(path: &str, value: &Value) -> Result<SensorOptions, ConfigError> {
    if let Some(id) = value.get(keys::ID) {
        option::<Identifier>(&format!("{path}.{}", keys::ID), id)?;
    }
    option(path, value)
}

/// Booleans also accept the words the firmware YAML has always allowed.
fn boolean(path: &str, value: &Value) -> Result<bool, ConfigError> {
    if let Value::String(word) = value {
        return match word.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "enable" => Ok(true),
            "false" | "no" | "off" | "disable" => Ok(false),
            _ => Err(ConfigError::schema(
                path,
                format!(
                    "Expected boolean value, but cannot convert '{word}' to a boolean. \
                     Please use 'true' or 'false'"
                ),
            )),
        };
    }
    option(path, value)
}

fn priority(path: &str, value: &Value) -> Result<f64, ConfigError> {
    let priority: f64 = option(path, value)?;
    if !priority.is_finite() {
        return Err(ConfigError::schema(path, "setup_priority must be a finite number"));
    }
    Ok(priority)
}
