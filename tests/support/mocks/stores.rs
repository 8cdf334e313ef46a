// tests/support/mocks/stores.rs
use async_trait::async_trait;
use folio_core::domain::Deadline;
use folio_core::domain::article::{Article, ArticleId, ArticleStore, ArticleTitle};
use folio_core::domain::author::{Author, AuthorId, AuthorStore};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::infrastructure::repositories::MemoryAuthorStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Author store whose lookups hang far longer than any test deadline.
pub struct StallingAuthorStore {
    pub delay: Duration,
}

#[async_trait]
impl AuthorStore for StallingAuthorStore {
    async fn get_by_id(&self, ctx: &Deadline, id: AuthorId) -> DomainResult<Author> {
        ctx.run("author.get_by_id", async {
            tokio::time::sleep(self.delay).await;
            Err(DomainError::NotFound(format!("author {id} never arrives")))
        })
        .await
    }
}

/// Delegates to a memory store and counts lookups per call.
pub struct CountingAuthorStore {
    pub inner: MemoryAuthorStore,
    pub calls: AtomicUsize,
}

impl CountingAuthorStore {
    pub fn new(inner: MemoryAuthorStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorStore for CountingAuthorStore {
    async fn get_by_id(&self, ctx: &Deadline, id: AuthorId) -> DomainResult<Author> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(ctx, id).await
    }
}

/// Article store that fails every call with the configured error.
pub struct FailingArticleStore {
    pub error: DomainError,
}

#[async_trait]
impl ArticleStore for FailingArticleStore {
    async fn fetch(
        &self,
        _ctx: &Deadline,
        _cursor: &str,
        _limit: i64,
    ) -> DomainResult<(Vec<Article>, String)> {
        Err(self.error.clone())
    }

    async fn get_by_id(&self, _ctx: &Deadline, _id: ArticleId) -> DomainResult<Article> {
        Err(self.error.clone())
    }

    async fn get_by_title(&self, _ctx: &Deadline, _title: &ArticleTitle) -> DomainResult<Article> {
        Err(self.error.clone())
    }

    async fn store(&self, _ctx: &Deadline, _article: &mut Article) -> DomainResult<()> {
        Err(self.error.clone())
    }

    async fn update(&self, _ctx: &Deadline, _article: &Article) -> DomainResult<()> {
        Err(self.error.clone())
    }

    async fn delete(&self, _ctx: &Deadline, _id: ArticleId) -> DomainResult<()> {
        Err(self.error.clone())
    }
}
