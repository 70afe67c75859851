//! Code emission for the ZE07 component.
//!
//! A validated [`Ze07Config`](crate::config::Ze07Config) becomes an
//! [`EmissionPlan`]: the directives that create the runtime object, register
//! it with the framework and the UART bus, configure it and bind its CO sensor.

mod directive;
mod emitter;
mod host;
mod render;

pub use directive::{Directive, DirectiveKind, EmissionPlan, ObjectHandle, SensorHandle};
pub use emitter::{emit, CodeEmitter, COMPONENT_CLASS};
pub use host::{
    ComponentRegistrar, HostRegistry, SensorFactory, UartDeviceRegistrar, UART_DEPENDENCY,
};
pub use render::render_cpp;
