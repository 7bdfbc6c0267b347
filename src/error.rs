use crate::domain::endpoints::Operation;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Malformed JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid decimal amount: {0}")]
    DecimalError(#[from] rust_decimal::Error),
    #[error("Invalid identifier: {0}")]
    UuidError(#[from] uuid::Error),
    #[error("Operation {0} has no request body")]
    NoRequestBody(Operation),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
