use super::{Identifier, ValidationError, Ze07Config};
use crate::constants::keys;

const CO_SENSOR_ID_FIELD: &str = "co.id";

const UPDATE_INTERVAL_IN_RX_ONLY: &str =
    "update_interval has no effect in rx_only mode. Please remove it.";

/// Check the cross-field constraints of a typed configuration and fill in
/// defaults.
///
/// In rx-only mode the sensor uploads readings on its own, so a polling
/// interval is rejected rather than silently ignored. Validating an already
/// validated configuration returns it unchanged.
pub fn validate(raw: Ze07Config) -> Result<Ze07Config, ValidationError> {
    let rx_only = raw.rx_only();

    if rx_only && raw.update_interval.is_some() {
        return Err(ValidationError::new(
            keys::UPDATE_INTERVAL,
            UPDATE_INTERVAL_IN_RX_ONLY,
        ));
    }

    if let Some(co_id) = raw.co_sensor_id() {
        if co_id.as_str() == raw.id() {
            return Err(ValidationError::new(
                CO_SENSOR_ID_FIELD,
                format!("ID '{co_id}' redefined! It is already the component's ID."),
            ));
        }
    }
    if let Some(uart_id) = &raw.uart.uart_id {
        let co_id = raw.co_sensor_id();
        if uart_id.as_str() == raw.id() || co_id.as_ref() == Some(uart_id) {
            return Err(ValidationError::new(
                keys::UART_ID,
                format!("ID '{uart_id}' is declared by this component and is not a UART bus."),
            ));
        }
    }

    let mut config = raw;
    config.rx_only = Some(rx_only);
    if config.id.is_none() {
        config.id = Some(Identifier::trusted(config.id()));
    }
    if let Some(co_id) = config.co_sensor_id() {
        if let Some(co) = config.co.as_mut() {
            co.id = Some(co_id);
        }
    }

    log::debug!(
        "Accepted config for '{}': rx_only={}, update_interval={:?}, co={}",
        config.id(),
        rx_only,
        config.update_interval.map(|i| i.minutes()),
        config.co.is_some()
    );
    Ok(config)
}
