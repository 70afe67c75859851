use super::directive::{Directive, EmissionPlan, ObjectHandle};
use super::host::{ComponentRegistrar, HostRegistry, SensorFactory, UartDeviceRegistrar};
use crate::config::Ze07Config;

pub const COMPONENT_CLASS: &str = "ze07::ZE07COComponent";

/// Turns a validated configuration into initialization directives.
pub struct CodeEmitter<'a> {
    components: &'a dyn ComponentRegistrar,
    uart: &'a dyn UartDeviceRegistrar,
    sensors: &'a dyn SensorFactory,
}

impl Default for CodeEmitter<'static> {
    fn default() -> Self {
        CodeEmitter::new(&HostRegistry, &HostRegistry, &HostRegistry)
    }
}

impl<'a> CodeEmitter<'a> {
    pub fn new(
        components: &'a dyn ComponentRegistrar,
        uart: &'a dyn UartDeviceRegistrar,
        sensors: &'a dyn SensorFactory,
    ) -> Self {
        CodeEmitter {
            components,
            uart,
            sensors,
        }
    }

    /// Build the plan for `config`, which must already have passed
    /// [`crate::config::validate`].
    ///
    /// The object is created and registered before any setter runs, and the
    /// sensor is bound last.
    pub fn emit(&self, config: &Ze07Config) -> EmissionPlan {
        let var = ObjectHandle::new(config.id());
        let mut plan = EmissionPlan {
            requires: vec![self.uart.dependency()],
            directives: Vec::new(),
        };

        plan.push(Directive::Instantiate {
            var: var.clone(),
            class: COMPONENT_CLASS,
        });
        plan.push(self.components.register_component(&var, &config.component));
        plan.push(self.uart.register_uart_device(&var, &config.uart));

        if let Some(interval) = config.update_interval {
            plan.push(Directive::SetUpdateInterval {
                var: var.clone(),
                minutes: interval.minutes(),
            });
        }
        plan.push(Directive::SetRxOnly {
            var: var.clone(),
            rx_only: config.rx_only(),
        });

        if let (Some(co), Some(co_id)) = (&config.co, config.co_sensor_id()) {
            let sensor = self.sensors.new_sensor(co_id.as_str(), co);
            plan.push(Directive::AttachSensor { var, sensor });
        }

        log::debug!(
            "Emitted {} directives for '{}'",
            plan.len(),
            config.id()
        );
        plan
    }
}

/// Emit with the host's stock collaborators.
pub fn emit(config: &Ze07Config) -> EmissionPlan {
    CodeEmitter::default().emit(config)
}
