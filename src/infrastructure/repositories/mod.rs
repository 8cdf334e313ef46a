// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_author;

pub(crate) use error::map_sqlx;
pub use memory::{MemoryArticleStore, MemoryAuthorStore, MemoryDatabase};
pub use postgres_article::PostgresArticleStore;
pub use postgres_author::PostgresAuthorStore;
