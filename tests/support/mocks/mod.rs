// tests/support/mocks/mod.rs
pub mod stores;
pub mod time;

pub use stores::{CountingAuthorStore, FailingArticleStore, StallingAuthorStore};
pub use time::{FixedClock, fixed_now};
