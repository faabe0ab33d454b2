//! Crate error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Case status value outside OPEN / PENDING / CLOSED
    #[error("invalid case status: {0:?}")]
    InvalidStatus(String),

    #[error("transaction not found: {0}")]
    TransactionNotFound(u64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
