use serde::Serialize;

use crate::config::SensorTraits;

/// Variable name of a generated object in the firmware image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectHandle(String);

impl ObjectHandle {
    pub fn new(id: impl Into<String>) -> Self {
        ObjectHandle(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A sensor output object built by the sensor factory.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorHandle {
    pub var: ObjectHandle,
    pub name: String,
    pub traits: SensorTraits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Instantiate,
    RegisterComponent,
    RegisterUartDevice,
    SetUpdateInterval,
    SetRxOnly,
    AttachSensor,
}

/// One initialization step of the generated component.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    Instantiate {
        var: ObjectHandle,
        class: &'static str,
    },
    RegisterComponent {
        var: ObjectHandle,
        #[serde(skip_serializing_if = "Option::is_none")]
        setup_priority: Option<f64>,
    },
    RegisterUartDevice {
        var: ObjectHandle,
        uart_id: String,
    },
    SetUpdateInterval {
        var: ObjectHandle,
        minutes: u8,
    },
    SetRxOnly {
        var: ObjectHandle,
        rx_only: bool,
    },
    AttachSensor {
        var: ObjectHandle,
        sensor: SensorHandle,
    },
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Instantiate { .. } => DirectiveKind::Instantiate,
            Directive::RegisterComponent { .. } => DirectiveKind::RegisterComponent,
            Directive::RegisterUartDevice { .. } => DirectiveKind::RegisterUartDevice,
            Directive::SetUpdateInterval { .. } => DirectiveKind::SetUpdateInterval,
            Directive::SetRxOnly { .. } => DirectiveKind::SetRxOnly,
            Directive::AttachSensor { .. } => DirectiveKind::AttachSensor,
        }
    }

    /// The object the directive acts on.
    pub fn var(&self) -> &ObjectHandle {
        match self {
            Directive::Instantiate { var, .. }
            | Directive::RegisterComponent { var, .. }
            | Directive::RegisterUartDevice { var, .. }
            | Directive::SetUpdateInterval { var, .. }
            | Directive::SetRxOnly { var, .. }
            | Directive::AttachSensor { var, .. } => var,
        }
    }
}

/// Ordered initialization directives for one component.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EmissionPlan {
    /// Framework subsystems that must be set up before this component.
    pub requires: Vec<&'static str>,
    pub directives: Vec<Directive>,
}

impl EmissionPlan {
    pub fn push(&mut self, directive: Directive) {
        log::trace!("Emitting {:?}", directive);
        self.directives.push(directive);
    }

    pub fn kinds(&self) -> Vec<DirectiveKind> {
        self.directives.iter().map(Directive::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
