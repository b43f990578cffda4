use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Decode failure: {message}")]
    DecodeFailure { message: String },

    #[error("Encode failure: {message}")]
    EncodeFailure { message: String },

    #[error("Image processing timed out after {seconds}s")]
    ProcessingTimeout { seconds: u64 },

    #[error("Task error: {message}")]
    TaskError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
