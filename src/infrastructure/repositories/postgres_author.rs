use super::map_sqlx;
use crate::domain::Deadline;
use crate::domain::author::{Author, AuthorId, AuthorStore};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuthorStore {
    pool: PgPool,
}

impl PostgresAuthorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AuthorStore for PostgresAuthorStore {
    async fn get_by_id(&self, ctx: &Deadline, id: AuthorId) -> DomainResult<Author> {
        let operation = format!("author.get_by_id id={id}");
        let row = ctx
            .run(&operation, async {
                sqlx::query_as::<_, AuthorRow>(
                    "SELECT id, name, created_at, updated_at FROM author WHERE id = $1",
                )
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(|err| map_sqlx(err, &operation))
            })
            .await?;

        row.map(Author::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found(operation))
    }
}
