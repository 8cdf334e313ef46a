// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::StatusCode;
use folio_core::application::services::ApplicationServices;
use folio_core::domain::Deadline;
use folio_core::domain::article::{Article, ArticleStore};
use folio_core::domain::author::Author;
use folio_core::infrastructure::repositories::MemoryDatabase;
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::builders::ArticleBuilder;
use super::mocks::{FixedClock, fixed_now};

pub fn deadline() -> Deadline {
    Deadline::after(Duration::from_secs(5))
}

/// Database with one author and articles A, B, C created one second apart.
pub async fn seeded_db() -> (MemoryDatabase, Author, Vec<Article>) {
    let db = MemoryDatabase::new();
    let author = db.insert_author("Ada Lovelace", fixed_now()).await.unwrap();
    let store = db.article_store();

    let mut articles = Vec::new();
    for (offset, title) in [(1, "A"), (2, "B"), (3, "C")] {
        let mut article = ArticleBuilder::new()
            .title(title)
            .author(author.id)
            .at_offset(offset)
            .build();
        store.store(&deadline(), &mut article).await.unwrap();
        articles.push(article);
    }
    (db, author, articles)
}

pub fn services_for(db: &MemoryDatabase, timeout: Duration) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(db.article_store()),
        Arc::new(db.author_store()),
        Arc::new(FixedClock),
        timeout,
    ))
}

pub fn make_test_router(db: &MemoryDatabase) -> axum::Router {
    let services = services_for(db, Duration::from_secs(5));
    build_router(HttpState { services })
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected json body")
    };
    (status, json)
}

pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}
