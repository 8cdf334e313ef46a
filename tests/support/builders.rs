// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use folio_core::domain::article::{Article, ArticleTitle};
use folio_core::domain::author::AuthorId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            content: "Test content".into(),
            author_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author_id: AuthorId) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// `created_at` = fixed_now() + `secs` seconds.
    pub fn at_offset(self, secs: i64) -> Self {
        self.created_at(fixed_now() + Duration::seconds(secs))
    }

    pub fn build(self) -> Article {
        Article::new(
            ArticleTitle::new(self.title).unwrap(),
            self.content,
            AuthorId::new(self.author_id).unwrap(),
            self.created_at,
        )
    }
}
