use super::ArticleService;
use super::service::surface;
use crate::{
    application::error::ApplicationResult,
    domain::{
        Deadline,
        article::{Article, ArticleId, ArticleTitle},
        errors::DomainResult,
    },
};

impl ArticleService {
    pub async fn get_by_id(&self, deadline: Deadline, id: i64) -> ApplicationResult<Article> {
        const OPERATION: &str = "article_service.get_by_id";
        let id = ArticleId::new(id)?;
        let ctx = self.effective_deadline(deadline);

        let result = ctx
            .run(OPERATION, async {
                let article = self.article_store.get_by_id(&ctx, id).await?;
                self.resolve_one(&ctx, article).await
            })
            .await;

        surface(OPERATION, result)
    }

    pub async fn get_by_title(&self, deadline: Deadline, title: &str) -> ApplicationResult<Article> {
        const OPERATION: &str = "article_service.get_by_title";
        let title = ArticleTitle::new(title)?;
        let ctx = self.effective_deadline(deadline);

        let result = ctx
            .run(OPERATION, async {
                let article = self.article_store.get_by_title(&ctx, &title).await?;
                self.resolve_one(&ctx, article).await
            })
            .await;

        surface(OPERATION, result)
    }

    async fn resolve_one(&self, ctx: &Deadline, mut article: Article) -> DomainResult<Article> {
        let author = self.author_store.get_by_id(ctx, article.author_id()).await?;
        article.resolve_author(author);
        Ok(article)
    }
}
