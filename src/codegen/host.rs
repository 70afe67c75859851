//! Seams to the host framework's own code generators.
//!
//! The emitter never builds registration or sensor directives itself; it asks
//! these collaborators, so a host with different registration calls can plug
//! in its own implementation.

use super::directive::{Directive, ObjectHandle, SensorHandle};
use crate::config::{ComponentOptions, SensorOptions, UartDeviceOptions};

/// Subsystem that must be initialized before any UART device.
pub const UART_DEPENDENCY: &str = "uart";

pub trait ComponentRegistrar {
    fn register_component(&self, var: &ObjectHandle, options: &ComponentOptions) -> Directive;
}

pub trait UartDeviceRegistrar {
    fn register_uart_device(&self, var: &ObjectHandle, options: &UartDeviceOptions) -> Directive;

    /// Subsystem the owning driver has to declare a dependency on.
    fn dependency(&self) -> &'static str {
        UART_DEPENDENCY
    }
}

pub trait SensorFactory {
    fn new_sensor(&self, id: &str, options: &SensorOptions) -> SensorHandle;
}

/// Default collaborators, matching the host framework's stock generators.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostRegistry;

impl ComponentRegistrar for HostRegistry {
    fn register_component(&self, var: &ObjectHandle, options: &ComponentOptions) -> Directive {
        Directive::RegisterComponent {
            var: var.clone(),
            setup_priority: options.setup_priority,
        }
    }
}

impl UartDeviceRegistrar for HostRegistry {
    fn register_uart_device(&self, var: &ObjectHandle, options: &UartDeviceOptions) -> Directive {
        Directive::RegisterUartDevice {
            var: var.clone(),
            uart_id: options.uart_id().to_string(),
        }
    }
}

impl SensorFactory for HostRegistry {
    fn new_sensor(&self, id: &str, options: &SensorOptions) -> SensorHandle {
        SensorHandle {
            var: ObjectHandle::new(id),
            name: options.name.clone(),
            traits: options.traits.clone(),
        }
    }
}
