// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticlePath, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Submitted attributes. The outer `Option` is whether the key was sent at all,
/// the inner one whether its value was `null`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArticleParams {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "今日の天気")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "晴れ")]
    pub content: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WrappedArticleParams {
    pub article: ArticleParams,
}

/// Accepts `{"article": {...}}` as well as the bare attribute object.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ArticleRequest {
    Wrapped(WrappedArticleParams),
    Bare(ArticleParams),
}

impl ArticleRequest {
    pub fn into_params(self) -> ArticleParams {
        match self {
            Self::Wrapped(wrapped) => wrapped.article,
            Self::Bare(params) => params,
        }
    }
}

pub type CreatedArticle = (StatusCode, [(header::HeaderName, String); 1], Json<ArticleDto>);

pub fn member_location(id: i64) -> String {
    format!("/articles/{id}.json")
}

#[utoipa::path(
    get,
    path = "/articles.json",
    responses(
        (status = 200, description = "Every stored article, oldest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}.json",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn show_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles.json",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto,
            headers(("location" = String, description = "URL of the new article"))),
        (status = 400, description = "Malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Field errors keyed by attribute name.", body = crate::presentation::http::error::FieldErrorsResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<CreatedArticle> {
    let params = payload.into_params();
    let command = CreateArticleCommand {
        title: params.title.flatten(),
        content: params.content.flatten(),
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    let location = member_location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    patch,
    path = "/articles/{id}.json",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Field errors keyed by attribute name.", body = crate::presentation::http::error::FieldErrorsResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let params = payload.into_params();
    let command = UpdateArticleCommand {
        id,
        title: params.title,
        content: params.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}.json",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
