// tests/support/helpers.rs
use super::mocks::{FailingArticleRepo, FixedClock, InMemoryArticleRepo};
use article_board::application::dto::ArticleDto;
use article_board::application::ports::time::Clock;
use article_board::application::services::ApplicationServices;
use article_board::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_board::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
};
use article_board::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn services_with(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(write, read, clock))
}

pub fn router_with(services: Arc<ApplicationServices>) -> Router {
    build_router(HttpState { services }, &[])
}

/// In-memory router; the repo handle lets tests inspect what was stored.
pub fn make_test_router() -> (Router, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let services = services_with(repo.clone(), repo.clone(), Arc::new(FixedClock::new()));
    (router_with(services), repo)
}

pub fn make_failing_router() -> Router {
    let repo = Arc::new(FailingArticleRepo);
    router_with(services_with(
        repo.clone(),
        repo,
        Arc::new(FixedClock::new()),
    ))
}

/// Router backed by a fresh in-memory SQLite database.
pub async fn make_sqlite_router() -> Router {
    make_sqlite_router_with_pool().await.0
}

/// Same as `make_sqlite_router`, also handing back the pool for direct SQL.
pub async fn make_sqlite_router_with_pool() -> (Router, SqlitePool) {
    let pool = database::in_memory_pool().await.expect("in-memory database");
    let services = services_with(
        Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        Arc::new(FixedClock::new()),
    );
    (router_with(services), pool)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Sends one request through the router. An empty response body becomes `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).expect("request");

    let resp = app.clone().oneshot(req).await.expect("response");
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected json body, got {:?}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };

    TestResponse {
        status: parts.status,
        headers: parts.headers,
        json,
    }
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_owned()))
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        json: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    }
}

/// Sends a body without a `Content-Type` header.
pub async fn send_untyped(app: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(raw.to_owned()))
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        json: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    }
}

pub async fn create_article(app: &Router, title: &str, content: &str) -> Value {
    let resp = send(
        app,
        Method::POST,
        "/articles.json",
        Some(serde_json::json!({ "article": { "title": title, "content": content } })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "create failed: {}", resp.json);
    resp.json
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "body: {}", resp.json);
    let ct = resp
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let err_field = resp.json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = resp.json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Decodes a response body as an article.
pub fn article_from(json: &Value) -> ArticleDto {
    serde_json::from_value(json.clone())
        .unwrap_or_else(|err| panic!("expected article json ({err}), got {json}"))
}

pub fn articles_from(json: &Value) -> Vec<ArticleDto> {
    serde_json::from_value(json.clone())
        .unwrap_or_else(|err| panic!("expected article list ({err}), got {json}"))
}
