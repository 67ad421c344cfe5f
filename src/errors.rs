use crate::FurnitureFamily;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("Unknown furniture family `{0}`")]
    UnknownFamily(String),

    #[error("Furniture family `{0}` is disabled by the current configuration")]
    FamilyDisabled(FurnitureFamily),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl ShowroomError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
