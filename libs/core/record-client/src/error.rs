use thiserror::Error;

/// Errors raised while talking to the record backend.
///
/// An envelope with `success: false` is not an error at this level; it is
/// returned as [`Outcome::Failure`](crate::Outcome::Failure).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
