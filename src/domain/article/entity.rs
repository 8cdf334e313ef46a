// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use chrono::{DateTime, Utc};

/// Author as seen from an article.
///
/// Stores only ever produce `Stub`; the service swaps in `Resolved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorRef {
    Stub(AuthorId),
    Resolved(Author),
}

impl AuthorRef {
    pub fn id(&self) -> AuthorId {
        match self {
            AuthorRef::Stub(id) => *id,
            AuthorRef::Resolved(author) => author.id,
        }
    }

    pub fn resolved(&self) -> Option<&Author> {
        match self {
            AuthorRef::Resolved(author) => Some(author),
            AuthorRef::Stub(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, AuthorRef::Resolved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// `None` until the store assigns one on insert.
    pub id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub content: String,
    pub author: AuthorRef,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: ArticleTitle,
        content: impl Into<String>,
        author_id: AuthorId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title,
            content: content.into(),
            author: AuthorRef::Stub(author_id),
            updated_at: now,
            created_at: now,
        }
    }

    pub fn author_id(&self) -> AuthorId {
        self.author.id()
    }

    /// Replace the author stub with the full record. A mismatched id is ignored.
    pub fn resolve_author(&mut self, author: Author) {
        if author.id == self.author.id() {
            self.author = AuthorRef::Resolved(author);
        }
    }
}
