pub const LOG_LEVEL: &str = "INFO";

pub const COMPONENT_ID: &str = "ze07cocomponent";
pub const UART_ID: &str = "uart_bus";
pub const CO_SENSOR_ID_SUFFIX: &str = "_co";
pub const RX_ONLY: bool = true;
