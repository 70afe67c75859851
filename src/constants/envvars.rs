pub const LOGGING_LEVEL: &str = "LOGGING_LEVEL";
