use core_config::ConfigError;
use record_client::{ClientError, RecordId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    /// Lookup failed for any reason; the cause is logged, not carried
    #[error("Category not found")]
    NotFound(RecordId),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend client error: {0}")]
    Client(#[from] ClientError),
}

pub type CategoryResult<T> = Result<T, CategoryError>;
