use crate::domain::Deadline;
use crate::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleStore, ArticleTitle, AuthorRef, to_store_precision,
};
use crate::domain::author::{Author, AuthorId, AuthorStore};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    authors: BTreeMap<AuthorId, Author>,
    articles: BTreeMap<ArticleId, Article>,
    last_author_id: i64,
    last_article_id: i64,
}

impl Tables {
    fn ensure_author(&self, operation: &str, id: AuthorId) -> DomainResult<()> {
        if self.authors.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::internal(format!(
                "{operation}: foreign key violation, author_id={id} does not exist"
            )))
        }
    }
}

/// Process-local stand-in for the relational store.
///
/// Both tables share one lock, so the article → author reference is checked
/// atomically with each write. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_author(
        &self,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Author> {
        let now = to_store_precision(now);
        let mut tables = self.tables.write().await;
        let id = AuthorId::new(tables.last_author_id + 1)?;
        tables.last_author_id += 1;
        let author = Author {
            id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        };
        tables.authors.insert(id, author.clone());
        Ok(author)
    }

    pub async fn article_count(&self) -> usize {
        self.tables.read().await.articles.len()
    }

    pub fn article_store(&self) -> MemoryArticleStore {
        MemoryArticleStore { db: self.clone() }
    }

    pub fn author_store(&self) -> MemoryAuthorStore {
        MemoryAuthorStore { db: self.clone() }
    }
}

#[derive(Clone)]
pub struct MemoryArticleStore {
    db: MemoryDatabase,
}

#[derive(Clone)]
pub struct MemoryAuthorStore {
    db: MemoryDatabase,
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn fetch(
        &self,
        ctx: &Deadline,
        cursor: &str,
        limit: i64,
    ) -> DomainResult<(Vec<Article>, String)> {
        let bound = ArticleCursor::decode(cursor)?;
        if limit <= 0 {
            return Err(DomainError::bad_param(format!(
                "article.fetch: limit must be positive, got {limit}"
            )));
        }
        let max_rows = usize::try_from(limit).unwrap_or(usize::MAX);

        let articles = ctx
            .run("article.fetch", async {
                let tables = self.db.tables.read().await;
                let mut rows: Vec<&Article> = tables
                    .articles
                    .values()
                    .filter(|a| bound.is_start() || a.created_at > bound.created_at)
                    .collect();
                rows.sort_by_key(|a| (a.created_at, a.id));
                Ok(rows.into_iter().take(max_rows).cloned().collect::<Vec<_>>())
            })
            .await?;

        let next_cursor = match articles.last() {
            Some(last) if articles.len() == max_rows => {
                ArticleCursor::new(last.created_at).encode()
            }
            _ => String::new(),
        };
        Ok((articles, next_cursor))
    }

    async fn get_by_id(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<Article> {
        ctx.run("article.get_by_id", async {
            let tables = self.db.tables.read().await;
            tables
                .articles
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("article.get_by_id id={id}")))
        })
        .await
    }

    async fn get_by_title(&self, ctx: &Deadline, title: &ArticleTitle) -> DomainResult<Article> {
        ctx.run("article.get_by_title", async {
            let tables = self.db.tables.read().await;
            tables
                .articles
                .values()
                .find(|a| a.title == *title)
                .cloned()
                .ok_or_else(|| {
                    DomainError::not_found(format!(
                        "article.get_by_title title={:?}",
                        title.as_str()
                    ))
                })
        })
        .await
    }

    async fn store(&self, ctx: &Deadline, article: &mut Article) -> DomainResult<()> {
        let mut row = article.clone();
        row.author = AuthorRef::Stub(article.author_id());
        row.created_at = to_store_precision(row.created_at);
        row.updated_at = to_store_precision(row.updated_at);

        let id = ctx
            .run("article.store", async {
                let mut tables = self.db.tables.write().await;
                tables.ensure_author("article.store", row.author_id())?;
                let id = ArticleId::new(tables.last_article_id + 1)?;
                tables.last_article_id += 1;
                row.id = Some(id);
                tables.articles.insert(id, row.clone());
                Ok::<_, DomainError>(id)
            })
            .await?;

        article.id = Some(id);
        article.created_at = row.created_at;
        article.updated_at = row.updated_at;
        Ok(())
    }

    async fn update(&self, ctx: &Deadline, article: &Article) -> DomainResult<()> {
        let id = article
            .id
            .ok_or_else(|| DomainError::bad_param("article.update: article has no id"))?;

        ctx.run("article.update", async {
            let mut tables = self.db.tables.write().await;
            if !tables.articles.contains_key(&id) {
                return Err(DomainError::write_conflict("article.update", id.into(), 0));
            }
            tables.ensure_author("article.update", article.author_id())?;
            if let Some(row) = tables.articles.get_mut(&id) {
                row.title = article.title.clone();
                row.content = article.content.clone();
                row.author = AuthorRef::Stub(article.author_id());
                row.updated_at = to_store_precision(article.updated_at);
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<()> {
        ctx.run("article.delete", async {
            let mut tables = self.db.tables.write().await;
            match tables.articles.remove(&id) {
                Some(_) => Ok(()),
                None => Err(DomainError::write_conflict("article.delete", id.into(), 0)),
            }
        })
        .await
    }
}

#[async_trait]
impl AuthorStore for MemoryAuthorStore {
    async fn get_by_id(&self, ctx: &Deadline, id: AuthorId) -> DomainResult<Author> {
        ctx.run("author.get_by_id", async {
            let tables = self.db.tables.read().await;
            tables
                .authors
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("author.get_by_id id={id}")))
        })
        .await
    }
}
