use std::fmt::{self, Write};

use itertools::Itertools;

use super::directive::{Directive, EmissionPlan, SensorHandle};

const SENSOR_CLASS: &str = "sensor::Sensor";

/// A string written as a C++ string literal.
struct CppStr<'a>(&'a str);

impl fmt::Display for CppStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                // Octal escapes stop after three digits, hex ones do not.
                c if c.is_ascii_control() => write!(f, "\\{:03o}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Instantiate { var, class } => {
                write!(f, "{class} *{} = new {class}();", var.as_str())
            }
            Directive::RegisterComponent {
                var,
                setup_priority,
            } => {
                if let Some(priority) = setup_priority {
                    writeln!(f, "{}->set_setup_priority({:?}f);", var.as_str(), priority)?;
                }
                write!(f, "App.register_component({});", var.as_str())
            }
            Directive::RegisterUartDevice { var, uart_id } => {
                write!(f, "{}->set_uart_parent({uart_id});", var.as_str())
            }
            Directive::SetUpdateInterval { var, minutes } => {
                write!(f, "{}->set_update_interval_min({minutes});", var.as_str())
            }
            Directive::SetRxOnly { var, rx_only } => {
                write!(f, "{}->set_rx_mode_only({rx_only});", var.as_str())
            }
            Directive::AttachSensor { var, sensor } => {
                write_sensor(f, sensor)?;
                write!(f, "{}->set_co_sensor({});", var.as_str(), sensor.var.as_str())
            }
        }
    }
}

fn write_sensor(f: &mut fmt::Formatter<'_>, sensor: &SensorHandle) -> fmt::Result {
    let id = sensor.var.as_str();
    writeln!(f, "{SENSOR_CLASS} *{id} = new {SENSOR_CLASS}();")?;
    writeln!(f, "App.register_sensor({id});")?;
    writeln!(f, "{id}->set_name({});", CppStr(&sensor.name))?;
    writeln!(
        f,
        "{id}->set_unit_of_measurement({});",
        CppStr(sensor.traits.unit_of_measurement)
    )?;
    writeln!(f, "{id}->set_icon({});", CppStr(sensor.traits.icon))?;
    writeln!(
        f,
        "{id}->set_accuracy_decimals({});",
        sensor.traits.accuracy_decimals
    )?;
    writeln!(f, "{id}->set_device_class({});", CppStr(sensor.traits.device_class))
}

/// Render the plan as C++ statements, one directive after another.
pub fn render_cpp(plan: &EmissionPlan) -> String {
    plan.directives.iter().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::emit;
    use crate::config::{validate, ComponentOptions, SensorOptions, UpdateInterval, Ze07Config};

    #[test]
    fn test_render_defaults() {
        let plan = emit(&validate(Ze07Config::default()).unwrap());
        assert_eq!(
            render_cpp(&plan),
            "ze07::ZE07COComponent *ze07cocomponent = new ze07::ZE07COComponent();\n\
             App.register_component(ze07cocomponent);\n\
             ze07cocomponent->set_uart_parent(uart_bus);\n\
             ze07cocomponent->set_rx_mode_only(true);"
        );
    }

    #[test]
    fn test_render_polling_with_sensor() {
        let config = validate(Ze07Config {
            id: Some("co_meter".parse().unwrap()),
            rx_only: Some(false),
            update_interval: Some(UpdateInterval::from_minutes(5)),
            co: Some(SensorOptions::named("Boiler \"CO\"")),
            component: ComponentOptions {
                setup_priority: Some(600.0),
            },
            ..Default::default()
        })
        .unwrap();
        let lines: Vec<String> = render_cpp(&emit(&config))
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(
            lines,
            vec![
                "ze07::ZE07COComponent *co_meter = new ze07::ZE07COComponent();",
                "co_meter->set_setup_priority(600.0f);",
                "App.register_component(co_meter);",
                "co_meter->set_uart_parent(uart_bus);",
                "co_meter->set_update_interval_min(5);",
                "co_meter->set_rx_mode_only(false);",
                "sensor::Sensor *co_meter_co = new sensor::Sensor();",
                "App.register_sensor(co_meter_co);",
                "co_meter_co->set_name(\"Boiler \\\"CO\\\"\");",
                "co_meter_co->set_unit_of_measurement(\"ppm\");",
                "co_meter_co->set_icon(\"mdi:chemical-weapon\");",
                "co_meter_co->set_accuracy_decimals(1);",
                "co_meter_co->set_device_class(\"\");",
                "co_meter->set_co_sensor(co_meter_co);",
            ]
        );
    }

    #[test]
    fn test_cpp_string_escapes() {
        assert_eq!(CppStr("plain").to_string(), "\"plain\"");
        assert_eq!(
            CppStr("a\"b\\c\nd\te").to_string(),
            r#""a\"b\\c\nd\te""#
        );
        assert_eq!(CppStr("bell\u{7}1").to_string(), r#""bell\0071""#);
        assert_eq!(CppStr("Küche").to_string(), "\"Küche\"");
    }
}
