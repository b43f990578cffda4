use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid raster: {0}")]
    InvalidRaster(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
