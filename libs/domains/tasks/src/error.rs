use core_config::ConfigError;
use record_client::{ClientError, RecordId};
use strum::Display;
use thiserror::Error;

/// Batch write kind, used in failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WriteAction {
    Create,
    Update,
}

#[derive(Debug, Error)]
pub enum TaskError {
    /// Lookup failed for any reason; the cause is logged, not carried
    #[error("Task not found")]
    NotFound(RecordId),

    /// The backend rejected the whole request
    #[error("{0}")]
    Rejected(String),

    /// At least one record in the batch failed, or none came back
    #[error("Failed to {0} task")]
    WriteFailed(WriteAction),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TaskResult<T> = Result<T, TaskError>;
