use thiserror::Error;

use super::ObjectId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("object {0} is not registered with this coordinator")]
    UnknownObject(ObjectId),
    #[error("object has not been loaded into a coordinator")]
    NotLoaded,
    #[error("unknown compass direction {0:?}")]
    UnknownDirection(String),
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse scene configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
