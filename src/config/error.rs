use thiserror::Error;

use crate::constants::keys;

/// A configuration that is well-typed but semantically inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("no '{}' component found in config", keys::COMPONENT)]
    MissingComponent,
    #[error("invalid config at '{path}': {message}")]
    Schema { path: String, message: String },
    #[error("invalid config at '{}.{}': {}", keys::COMPONENT, .0.field, .0.message)]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    pub(crate) fn schema(path: impl Into<String>, message: impl ToString) -> Self {
        ConfigError::Schema {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Path of the offending option, when the error concerns one.
    pub fn path(&self) -> Option<String> {
        match self {
            ConfigError::Schema { path, .. } => Some(path.clone()),
            ConfigError::Validation(e) => Some(format!("{}.{}", keys::COMPONENT, e.field)),
            ConfigError::MissingComponent => Some(keys::COMPONENT.to_string()),
            ConfigError::Io(_) | ConfigError::Yaml(_) => None,
        }
    }
}
