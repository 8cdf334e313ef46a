use crate::domain::Deadline;
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence capability for articles.
///
/// Returned articles always carry `AuthorRef::Stub`.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Keyset page of articles with `created_at` strictly after the cursor,
    /// ascending. The second element is the next cursor, or empty once the
    /// page comes back shorter than `limit`.
    async fn fetch(
        &self,
        ctx: &Deadline,
        cursor: &str,
        limit: i64,
    ) -> DomainResult<(Vec<Article>, String)>;

    async fn get_by_id(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<Article>;

    async fn get_by_title(&self, ctx: &Deadline, title: &ArticleTitle) -> DomainResult<Article>;

    /// Insert `article`, writing the assigned id back into it.
    async fn store(&self, ctx: &Deadline, article: &mut Article) -> DomainResult<()>;

    async fn update(&self, ctx: &Deadline, article: &Article) -> DomainResult<()>;

    async fn delete(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<()>;
}
