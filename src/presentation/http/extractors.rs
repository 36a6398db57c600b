// src/presentation/http/extractors.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// `axum::Json` with rejections rendered as the service's JSON error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// Member id taken from `/articles/{id}` where the segment may carry a `.json` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePath(pub i64);

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::from_error(ApplicationError::bad_request(err.body_text())))?;

        parse_member_segment(&segment)
            .map(Self)
            .map_err(HttpError::from_error)
    }
}

pub fn parse_member_segment(segment: &str) -> ApplicationResult<i64> {
    let raw = segment.strip_suffix(".json").unwrap_or(segment);
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApplicationError::bad_request(format!(
            "invalid article id: {segment}"
        ))),
    }
}
