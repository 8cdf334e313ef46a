// src/domain/deadline.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Point in time after which a call must stop doing store work.
///
/// Every store and service operation takes one of these as its first
/// argument. Expiry drops the in-flight future, which cancels the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    pub fn earliest(self, other: Deadline) -> Deadline {
        self.min(other)
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Drive `fut` to completion unless the deadline passes first.
    pub async fn run<T, F>(&self, operation: &str, fut: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        if self.is_expired() {
            return Err(DomainError::Timeout(format!(
                "{operation}: deadline already elapsed"
            )));
        }

        match tokio::time::timeout_at(self.at, fut).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::Timeout(operation.to_string())),
        }
    }
}
