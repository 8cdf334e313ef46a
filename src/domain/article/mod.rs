pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cursor::{ArticleCursor, to_store_precision};
pub use entity::{Article, AuthorRef};
pub use repository::ArticleStore;
pub use value_objects::{ArticleId, ArticleTitle};
