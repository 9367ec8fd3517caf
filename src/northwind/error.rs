use crate::store::CommitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NorthwindError {
    #[error("Invalid customer: {0}")]
    Validation(String),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Commit failed: {0}")]
    Commit(#[from] CommitError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, NorthwindError>;
