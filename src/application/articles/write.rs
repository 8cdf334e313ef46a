use super::ArticleService;
use super::service::surface;
use crate::{
    application::error::ApplicationResult,
    domain::{
        Deadline,
        article::{Article, ArticleId},
    },
};

// Writes need no author resolution and go straight to the store.
impl ArticleService {
    pub async fn store(&self, deadline: Deadline, article: &mut Article) -> ApplicationResult<()> {
        let ctx = self.effective_deadline(deadline);
        let result = self.article_store.store(&ctx, article).await;
        surface("article_service.store", result)
    }

    pub async fn update(&self, deadline: Deadline, article: &Article) -> ApplicationResult<()> {
        let ctx = self.effective_deadline(deadline);
        let result = self.article_store.update(&ctx, article).await;
        surface("article_service.update", result)
    }

    pub async fn delete(&self, deadline: Deadline, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        let ctx = self.effective_deadline(deadline);
        let result = self.article_store.delete(&ctx, id).await;
        surface("article_service.delete", result)
    }
}
