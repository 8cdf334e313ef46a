// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::Deadline;
use crate::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleStore, ArticleTitle, AuthorRef, to_store_precision,
};
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_ARTICLE: &str =
    "SELECT id, title, content, author_id, updated_at, created_at FROM article";

#[derive(Clone)]
pub struct PostgresArticleStore {
    pool: PgPool,
}

impl PostgresArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    updated_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: Some(ArticleId::new(row.id)?),
            title: ArticleTitle::new(row.title)?,
            content: row.content,
            author: AuthorRef::Stub(AuthorId::new(row.author_id)?),
            updated_at: row.updated_at,
            created_at: row.created_at,
        })
    }
}

impl PostgresArticleStore {
    async fn fetch_page(&self, bound: ArticleCursor, limit: i64) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLE);
        if !bound.is_start() {
            builder.push(" WHERE created_at > ");
            builder.push_bind(bound.created_at);
        }
        // id only breaks ties; the cursor itself carries created_at alone.
        builder.push(" ORDER BY created_at ASC, id ASC LIMIT ");
        builder.push_bind(limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx(err, format!("article.fetch limit={limit}")))?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn fetch_one_where(
        &self,
        column: &'static str,
        operation: &str,
        bind: ArticleKey<'_>,
    ) -> DomainResult<Option<Article>> {
        let sql = format!("{SELECT_ARTICLE} WHERE {column} = $1 ORDER BY id LIMIT 1");
        let query = sqlx::query_as::<_, ArticleRow>(&sql);
        let query = match bind {
            ArticleKey::Id(id) => query.bind(i64::from(id)),
            ArticleKey::Title(title) => query.bind(title.as_str()),
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx(err, operation))?;

        row.map(Article::try_from).transpose()
    }
}

enum ArticleKey<'a> {
    Id(ArticleId),
    Title(&'a ArticleTitle),
}

#[async_trait]
impl ArticleStore for PostgresArticleStore {
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

        let articles = ctx
            .run("article.fetch", self.fetch_page(bound, limit))
            .await?;

        let next_cursor = match articles.last() {
            Some(last) if articles.len() as i64 == limit => {
                ArticleCursor::new(last.created_at).encode()
            }
            _ => String::new(),
        };

        tracing::debug!(rows = articles.len(), limit, "article.fetch page");
        Ok((articles, next_cursor))
    }

    async fn get_by_id(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<Article> {
        let operation = format!("article.get_by_id id={id}");
        let found = ctx
            .run(&operation, self.fetch_one_where("id", &operation, ArticleKey::Id(id)))
            .await?;
        found.ok_or_else(|| DomainError::not_found(operation))
    }

    async fn get_by_title(&self, ctx: &Deadline, title: &ArticleTitle) -> DomainResult<Article> {
        let operation = format!("article.get_by_title title={:?}", title.as_str());
        let found = ctx
            .run(
                &operation,
                self.fetch_one_where("title", &operation, ArticleKey::Title(title)),
            )
            .await?;
        found.ok_or_else(|| DomainError::not_found(operation))
    }

    async fn store(&self, ctx: &Deadline, article: &mut Article) -> DomainResult<()> {
        let created_at = to_store_precision(article.created_at);
        let updated_at = to_store_precision(article.updated_at);
        let author_id = article.author_id();

        let insert = sqlx::query_scalar::<_, i64>(
            "INSERT INTO article (title, content, author_id, updated_at, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(i64::from(author_id))
        .bind(updated_at)
        .bind(created_at)
        .fetch_one(&self.pool);

        let id = ctx
            .run("article.store", async {
                insert.await.map_err(|err| {
                    map_sqlx(err, format!("article.store author_id={author_id}"))
                })
            })
            .await?;

        article.id = Some(ArticleId::new(id)?);
        article.created_at = created_at;
        article.updated_at = updated_at;
        Ok(())
    }

    async fn update(&self, ctx: &Deadline, article: &Article) -> DomainResult<()> {
        let id = article
            .id
            .ok_or_else(|| DomainError::bad_param("article.update: article has no id"))?;

        let result = ctx
            .run("article.update", async {
                sqlx::query(
                    "UPDATE article SET title = $1, content = $2, author_id = $3, updated_at = $4
                     WHERE id = $5",
                )
                .bind(article.title.as_str())
                .bind(article.content.as_str())
                .bind(i64::from(article.author_id()))
                .bind(to_store_precision(article.updated_at))
                .bind(i64::from(id))
                .execute(&self.pool)
                .await
                .map_err(|err| map_sqlx(err, format!("article.update id={id}")))
            })
            .await?;

        match result.rows_affected() {
            1 => Ok(()),
            affected => Err(DomainError::write_conflict("article.update", id.into(), affected)),
        }
    }

    async fn delete(&self, ctx: &Deadline, id: ArticleId) -> DomainResult<()> {
        let result = ctx
            .run("article.delete", async {
                sqlx::query("DELETE FROM article WHERE id = $1")
                    .bind(i64::from(id))
                    .execute(&self.pool)
                    .await
                    .map_err(|err| map_sqlx(err, format!("article.delete id={id}")))
            })
            .await?;

        match result.rows_affected() {
            1 => Ok(()),
            affected => Err(DomainError::write_conflict("article.delete", id.into(), affected)),
        }
    }
}
