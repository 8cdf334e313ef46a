// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(DomainError),

    #[error("deadline exceeded: {0}")]
    Timeout(String),
}

impl ApplicationError {
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

// Store-level deadline expiry and orchestration-level expiry surface the same way.
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Timeout(msg) => Self::Timeout(msg),
            other => Self::Domain(other),
        }
    }
}
