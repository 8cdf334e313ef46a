use std::sync::Arc;
use std::time::Duration;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    Deadline,
    article::ArticleStore,
    author::AuthorStore,
    errors::{DomainError, DomainResult},
};

/// Composes article and author lookups into fully resolved articles.
///
/// Every call runs under the earlier of the caller's deadline and the
/// service's own timeout.
pub struct ArticleService {
    pub(super) article_store: Arc<dyn ArticleStore>,
    pub(super) author_store: Arc<dyn AuthorStore>,
    pub(super) timeout: Duration,
}

impl ArticleService {
    pub fn new(
        article_store: Arc<dyn ArticleStore>,
        author_store: Arc<dyn AuthorStore>,
        timeout: Duration,
    ) -> Self {
        Self {
            article_store,
            author_store,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(super) fn effective_deadline(&self, caller: Deadline) -> Deadline {
        caller.earliest(Deadline::after(self.timeout))
    }
}

/// Convert a pipeline result, logging deadline expiry once per call.
pub(super) fn surface<T>(operation: &str, result: DomainResult<T>) -> ApplicationResult<T> {
    if let Err(DomainError::Timeout(detail)) = &result {
        tracing::warn!(operation, detail = %detail, "deadline exceeded");
    }
    result.map_err(ApplicationError::from)
}
