use crate::domain::article::{Article, AuthorRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AuthorRef> for AuthorDto {
    fn from(author: AuthorRef) -> Self {
        match author {
            AuthorRef::Stub(id) => Self {
                id: id.into(),
                name: None,
                created_at: None,
                updated_at: None,
            },
            AuthorRef::Resolved(author) => Self {
                id: author.id.into(),
                name: Some(author.name),
                created_at: Some(author.created_at),
                updated_at: Some(author.updated_at),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(Into::into),
            title: article.title.into(),
            content: article.content,
            author: article.author.into(),
            updated_at: article.updated_at,
            created_at: article.created_at,
        }
    }
}
