use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid auto: {0}")]
    InvalidAuto(String),
    #[error("invalid auto update: {0}")]
    InvalidUpdateAuto(String),
    #[error("auto not found: {0}")]
    AutoNotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(vin: &str) -> Self { Self::AutoNotFound(format!("no auto with vin {vin}")) }

    pub fn duplicate(vin: &str) -> Self { Self::InvalidAuto(format!("vin {vin} already exists")) }

    pub fn invalid_auto(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) | ModelError::Duplicate(msg) => Self::InvalidAuto(msg),
            ModelError::Db(msg) => Self::Storage(msg),
        }
    }

    pub fn invalid_update(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) | ModelError::Duplicate(msg) => Self::InvalidUpdateAuto(msg),
            ModelError::Db(msg) => Self::Storage(msg),
        }
    }

    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidAuto(_) => 2001,
            ServiceError::InvalidUpdateAuto(_) => 2002,
            ServiceError::AutoNotFound(_) => 2003,
            ServiceError::Storage(_) => 2100,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(msg) => Self::Storage(msg),
            ModelError::Validation(msg) | ModelError::Duplicate(msg) => Self::InvalidAuto(msg),
        }
    }
}
