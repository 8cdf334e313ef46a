mod enrich;
mod fetch;
mod get;
mod service;
mod write;

pub use service::ArticleService;
