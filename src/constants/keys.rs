pub const COMPONENT: &str = "ze07";

pub const ID: &str = "id";
pub const CO: &str = "co";
pub const RX_ONLY: &str = "rx_only";
pub const UPDATE_INTERVAL: &str = "update_interval";
pub const SETUP_PRIORITY: &str = "setup_priority";
pub const UART_ID: &str = "uart_id";
