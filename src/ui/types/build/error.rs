use crate::streams::StreamError;
use crate::tasks::TaskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Task(#[from] TaskError),
}
