// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("bad parameter: {0}")]
    BadParamInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("write conflict: {0}")]
    WriteConflict(String),
    #[error("deadline exceeded: {0}")]
    Timeout(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn bad_param(msg: impl Into<String>) -> Self {
        Self::BadParamInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Targeted writes must touch exactly one row.
    pub fn write_conflict(operation: &str, id: i64, affected: u64) -> Self {
        Self::WriteConflict(format!(
            "{operation} id={id}: expected 1 affected row, got {affected}"
        ))
    }
}
