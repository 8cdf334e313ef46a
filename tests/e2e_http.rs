// tests/e2e_http.rs
use axum::http::StatusCode;
use folio_core::domain::article::ArticleCursor;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;
use support::{empty_request, json_request, make_test_router, read_json, seeded_db};

#[tokio::test]
async fn health_returns_ok() {
    let (db, _, _) = seeded_db().await;
    let app = make_test_router(&db);

    let resp = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn listing_sets_cursor_header_and_resolves_authors() {
    let (db, author, seeded) = seeded_db().await;
    let app = make_test_router(&db);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/articles?num=2"))
        .await
        .unwrap();
    let cursor = resp
        .headers()
        .get("x-cursor")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cursor, ArticleCursor::new(seeded[1].created_at).encode());

    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "A");
    assert_eq!(items[0]["author"]["name"], author.name.as_str());

    let resp = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/articles?num=2&cursor={cursor}"),
        ))
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("x-cursor").map(|v| v.as_bytes()),
        Some(&b""[..])
    );
    let (_, body) = read_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn malformed_cursor_returns_400() {
    let (db, _, _) = seeded_db().await;
    let app = make_test_router(&db);

    let resp = app
        .oneshot(empty_request("GET", "/api/v1/articles?cursor=bogus!"))
        .await
        .unwrap();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn unknown_article_returns_404() {
    let (db, _, _) = seeded_db().await;
    let app = make_test_router(&db);

    let resp = app
        .oneshot(empty_request("GET", "/api/v1/articles/999"))
        .await
        .unwrap();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body["message"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn create_update_delete_roundtrip() {
    let (db, author, _) = seeded_db().await;
    let app = make_test_router(&db);
    let author_id: i64 = author.id.into();

    let payload = json!({ "title": "Fresh", "content": "hello", "author_id": author_id });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/articles", &payload))
        .await
        .unwrap();
    let (status, created) = read_json(resp).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["author"]["name"], "Ada Lovelace");
    let id = created["id"].as_i64().expect("assigned id");

    let payload = json!({ "title": "Fresh, edited", "content": "bye", "author_id": author_id });
    let resp = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/v1/articles/{id}"), &payload))
        .await
        .unwrap();
    let (status, updated) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Fresh, edited");
    assert_eq!(updated["created_at"], created["created_at"]);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/v1/articles/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(empty_request("DELETE", &format!("/api/v1/articles/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_with_blank_title_returns_400() {
    let (db, author, _) = seeded_db().await;
    let app = make_test_router(&db);
    let author_id: i64 = author.id.into();

    let payload = json!({ "title": "  ", "content": "x", "author_id": author_id });
    let resp = app
        .oneshot(json_request("POST", "/api/v1/articles", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.article_count().await, 3);
}
