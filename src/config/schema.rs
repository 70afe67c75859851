//! Typed configuration of a ZE07 component.
//!
//! The component schema is the driver's own keys plus the base options of the
//! two framework pieces it plugs into: the generic component base and the UART
//! device base. Each base is its own struct, flattened into [`Ze07Config`].

use serde::{Deserialize, Serialize};

use super::{Identifier, UpdateInterval};
use crate::constants::defaults;

/// Options every framework component accepts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComponentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_priority: Option<f64>,
}

/// Options every UART-attached device accepts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UartDeviceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uart_id: Option<Identifier>,
}

impl UartDeviceOptions {
    /// UART bus the device is attached to, falling back to the default bus.
    pub fn uart_id(&self) -> &str {
        self.uart_id.as_deref().unwrap_or(defaults::UART_ID)
    }
}

/// Fixed presentation tags of a sensor output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SensorTraits {
    pub unit_of_measurement: &'static str,
    pub icon: &'static str,
    pub accuracy_decimals: u8,
    pub device_class: &'static str,
}

/// The ZE07 reports carbon monoxide in ppm with one decimal.
pub const CO_SENSOR_TRAITS: SensorTraits = SensorTraits {
    unit_of_measurement: "ppm",
    icon: "mdi:chemical-weapon",
    accuracy_decimals: 1,
    device_class: "",
};

fn co_sensor_traits() -> SensorTraits {
    CO_SENSOR_TRAITS
}

/// Options of the CO sensor output.
///
/// Only `id` and `name` come from the user; the presentation tags are fixed
/// for this driver.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SensorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(skip_deserializing, default = "co_sensor_traits")]
    pub traits: SensorTraits,
}

impl SensorOptions {
    pub fn named(name: impl Into<String>) -> Self {
        SensorOptions {
            id: None,
            name: name.into(),
            traits: CO_SENSOR_TRAITS,
        }
    }
}

/// Configuration of one ZE07 CO component.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Ze07Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co: Option<SensorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<UpdateInterval>,
    #[serde(flatten)]
    pub component: ComponentOptions,
    #[serde(flatten)]
    pub uart: UartDeviceOptions,
}

impl Ze07Config {
    /// Identifier of the generated component object.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(defaults::COMPONENT_ID)
    }

    /// Receive-only mode, `true` unless configured otherwise.
    pub fn rx_only(&self) -> bool {
        self.rx_only.unwrap_or(defaults::RX_ONLY)
    }

    /// Identifier of the CO sensor output, if one is configured.
    pub fn co_sensor_id(&self) -> Option<Identifier> {
        self.co.as_ref().map(|co| match &co.id {
            Some(id) => id.clone(),
            None => Identifier::trusted(format!(
                "{}{}",
                self.id(),
                defaults::CO_SENSOR_ID_SUFFIX
            )),
        })
    }
}
