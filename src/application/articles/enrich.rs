use super::ArticleService;
use crate::domain::{
    Deadline,
    article::Article,
    author::{Author, AuthorId},
    errors::{DomainError, DomainResult},
};
use futures::future::try_join_all;
use std::collections::{BTreeSet, HashMap};

impl ArticleService {
    /// Swap every author stub for the full author record.
    ///
    /// Each distinct author is looked up once and all lookups run
    /// concurrently. The first failure drops the remaining lookups and
    /// leaves `articles` untouched.
    pub(super) async fn resolve_authors(
        &self,
        ctx: &Deadline,
        articles: &mut [Article],
    ) -> DomainResult<()> {
        let ids: BTreeSet<AuthorId> = articles.iter().map(Article::author_id).collect();
        let lookups = ids
            .into_iter()
            .map(|id| self.author_store.get_by_id(ctx, id));

        let authors: HashMap<AuthorId, Author> = try_join_all(lookups)
            .await?
            .into_iter()
            .map(|author| (author.id, author))
            .collect();

        let resolved = articles
            .iter()
            .map(|article| {
                authors.get(&article.author_id()).cloned().ok_or_else(|| {
                    DomainError::internal(format!(
                        "author lookup for author_id={} returned a different record",
                        article.author_id()
                    ))
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        for (article, author) in articles.iter_mut().zip(resolved) {
            article.resolve_author(author);
        }
        Ok(())
    }
}
