use super::ArticleService;
use super::service::surface;
use crate::{
    application::error::ApplicationResult,
    domain::{Deadline, article::Article, errors::DomainError},
};

impl ArticleService {
    /// One page of articles with authors resolved, plus the next cursor
    /// (empty at the end of the sequence).
    pub async fn fetch(
        &self,
        deadline: Deadline,
        cursor: &str,
        num: i64,
    ) -> ApplicationResult<(Vec<Article>, String)> {
        const OPERATION: &str = "article_service.fetch";
        let ctx = self.effective_deadline(deadline);

        let result = ctx
            .run(OPERATION, async {
                let (mut articles, next_cursor) =
                    self.article_store.fetch(&ctx, cursor, num).await?;
                self.resolve_authors(&ctx, &mut articles).await?;
                tracing::debug!(rows = articles.len(), "article page resolved");
                Ok::<_, DomainError>((articles, next_cursor))
            })
            .await;

        surface(OPERATION, result)
    }
}
