#![allow(dead_code)]
// Not every test binary uses every stub

pub const DEFAULTS: &str = r#"
uart:
  id: uart_bus
  rx_pin: GPIO16
  baud_rate: 9600

ze07:
"#;

pub const RX_ONLY_WITH_INTERVAL: &str = r#"
ze07:
  rx_only: true
  update_interval: 5min
"#;

pub const DEFAULT_RX_WITH_INTERVAL: &str = r#"
ze07:
  update_interval: 5min
"#;

pub const POLLING_WITH_INTERVAL: &str = r#"
ze07:
  rx_only: false
  update_interval: 5min
"#;

pub const WITH_CO_SENSOR: &str = r#"
ze07:
  id: hallway_ze07
  co:
    name: Hallway CO
"#;

pub const FULL: &str = r#"
ze07:
  id: boiler_ze07
  rx_only: false
  update_interval: 300s
  setup_priority: 600
  uart_id: uart_sensor
  co:
    id: boiler_co
    name: Boiler room CO
"#;

pub const UNKNOWN_KEY: &str = r#"
ze07:
  rx_only: false
  baud_rate: 9600
"#;

pub const SUB_MINUTE_INTERVAL: &str = r#"
ze07:
  rx_only: false
  update_interval: 90s
"#;

pub const SPACE_IN_ID: &str = r#"
ze07:
  id: "my sensor"
"#;

pub const DIGIT_UART_ID: &str = r#"
ze07:
  uart_id: 1uart
"#;

pub const KEYWORD_CO_ID: &str = r#"
ze07:
  co:
    id: class
    name: CO
"#;

pub const DUPLICATE_IDS: &str = r#"
ze07:
  id: dup
  co:
    id: dup
    name: CO
"#;

pub const NO_COMPONENT: &str = r#"
uart:
  baud_rate: 9600
"#;

pub const UPLOAD_FRAME_5PPM: &str = "FF 04 00 32 00 00 00 00 CA";
pub const ANSWER_FRAME_50PPM: &str = "ff860000 01f40000 85";
