use ze07::codegen::{self, Directive, DirectiveKind, ObjectHandle};
use ze07::config;

mod stubs;

const ALWAYS_FIRST: [DirectiveKind; 3] = [
    DirectiveKind::Instantiate,
    DirectiveKind::RegisterComponent,
    DirectiveKind::RegisterUartDevice,
];

#[test]
fn test_defaults_plan() {
    let config = config::from_str(stubs::config::DEFAULTS).unwrap();
    let plan = codegen::emit(&config);
    assert_eq!(
        plan.kinds(),
        vec![
            DirectiveKind::Instantiate,
            DirectiveKind::RegisterComponent,
            DirectiveKind::RegisterUartDevice,
            DirectiveKind::SetRxOnly,
        ]
    );
    assert_eq!(
        plan.directives[3],
        Directive::SetRxOnly {
            var: ObjectHandle::new("ze07cocomponent"),
            rx_only: true,
        }
    );
}

#[test]
fn test_polling_plan_sets_interval() {
    let config = config::from_str(stubs::config::POLLING_WITH_INTERVAL).unwrap();
    let plan = codegen::emit(&config);
    assert!(plan.directives.contains(&Directive::SetUpdateInterval {
        var: ObjectHandle::new("ze07cocomponent"),
        minutes: 5,
    }));
}

#[test]
fn test_sensor_plan_ends_with_binding() {
    let config = config::from_str(stubs::config::WITH_CO_SENSOR).unwrap();
    let plan = codegen::emit(&config);
    match plan.directives.last() {
        Some(Directive::AttachSensor { var, sensor }) => {
            assert_eq!(var.as_str(), "hallway_ze07");
            assert_eq!(sensor.var.as_str(), "hallway_ze07_co");
            assert_eq!(sensor.name, "Hallway CO");
            assert_eq!(sensor.traits.unit_of_measurement, "ppm");
            assert_eq!(sensor.traits.accuracy_decimals, 1);
        }
        other => panic!("expected sensor binding last, got {:?}", other),
    }
}

#[test]
fn test_registration_always_precedes_setters() {
    for raw in [
        stubs::config::DEFAULTS,
        stubs::config::POLLING_WITH_INTERVAL,
        stubs::config::WITH_CO_SENSOR,
        stubs::config::FULL,
    ] {
        let plan = codegen::emit(&config::from_str(raw).unwrap());
        assert_eq!(plan.kinds()[..3], ALWAYS_FIRST);
        assert_eq!(plan.requires, vec!["uart"]);
        let var = plan.directives[0].var();
        assert!(plan.directives.iter().all(|d| d.var() == var));
    }
}

#[test]
fn test_full_plan_json() {
    let plan = codegen::emit(&config::from_str(stubs::config::FULL).unwrap());
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["requires"], serde_json::json!(["uart"]));
    assert_eq!(
        json["directives"][0],
        serde_json::json!({
            "directive": "instantiate",
            "var": "boiler_ze07",
            "class": "ze07::ZE07COComponent"
        })
    );
    assert_eq!(
        json["directives"][1],
        serde_json::json!({
            "directive": "register_component",
            "var": "boiler_ze07",
            "setup_priority": 600.0
        })
    );
    assert_eq!(
        json["directives"][2],
        serde_json::json!({
            "directive": "register_uart_device",
            "var": "boiler_ze07",
            "uart_id": "uart_sensor"
        })
    );
    assert_eq!(json["directives"][3]["minutes"], 5);
    assert_eq!(json["directives"][4]["rx_only"], false);
    assert_eq!(json["directives"][5]["sensor"]["var"], "boiler_co");
    assert_eq!(
        json["directives"][5]["sensor"]["traits"]["icon"],
        "mdi:chemical-weapon"
    );
}
