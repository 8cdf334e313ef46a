// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleDto;
use crate::domain::article::{Article, ArticleId, ArticleTitle, AuthorRef};
use crate::domain::author::AuthorId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Response header carrying the next page's cursor. Empty at the end.
pub const X_CURSOR: &str = "x-cursor";

const MAX_NUM: i64 = 100;

fn default_num() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct FetchParams {
    #[serde(default = "default_num")]
    pub num: i64,
    #[serde(default)]
    pub cursor: String,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author_id: i64,
}

pub async fn fetch_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FetchParams>,
) -> HttpResult<Response> {
    let num = params.num.clamp(1, MAX_NUM);
    let deadline = state.services.request_deadline();

    let (articles, next_cursor) = state
        .services
        .articles
        .fetch(deadline, &params.cursor, num)
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&next_cursor)
        .map_err(|_| HttpError::internal("cursor is not a valid header value"))?;
    headers.insert(HeaderName::from_static(X_CURSOR), value);

    let items: Vec<ArticleDto> = articles.into_iter().map(Into::into).collect();
    Ok((headers, Json(items)).into_response())
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    let deadline = state.services.request_deadline();
    state
        .services
        .articles
        .get_by_id(deadline, id)
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let deadline = state.services.request_deadline();
    let mut article = Article::new(
        ArticleTitle::new(payload.title)?,
        payload.content,
        AuthorId::new(payload.author_id)?,
        state.services.clock().now(),
    );

    let articles = &state.services.articles;
    articles.store(deadline, &mut article).await.into_http()?;
    let id = article
        .id
        .ok_or_else(|| HttpError::internal("store did not assign an id"))?;

    let created = articles
        .get_by_id(deadline, id.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let deadline = state.services.request_deadline();
    let now = state.services.clock().now();
    // created_at is immutable; the store ignores the value carried here.
    let article = Article {
        id: Some(ArticleId::new(id)?),
        title: ArticleTitle::new(payload.title)?,
        content: payload.content,
        author: AuthorRef::Stub(AuthorId::new(payload.author_id)?),
        updated_at: now,
        created_at: now,
    };

    let articles = &state.services.articles;
    articles.update(deadline, &article).await.into_http()?;
    articles
        .get_by_id(deadline, id)
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    let deadline = state.services.request_deadline();
    state
        .services
        .articles
        .delete(deadline, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
