use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::{errors::DomainError, validation::ValidationErrors};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug)]
enum ErrorPayload {
    Message(String),
    Fields(ValidationErrors),
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    payload: ErrorPayload,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::BadRequest(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                payload: ErrorPayload::Fields(errors),
            },
            DomainError::InvalidIdentifier(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Persistence(msg) => Self::internal(msg),
        }
    }

    fn internal(detail: String) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".into(),
        )
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            payload: ErrorPayload::Message(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => rejection.status(),
        };
        Self::new(status, rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.payload {
            ErrorPayload::Fields(errors) => (self.status, Json(errors)).into_response(),
            ErrorPayload::Message(message) => {
                let payload = ErrorResponse {
                    error: self
                        .status
                        .canonical_reason()
                        .unwrap_or("error")
                        .to_string(),
                    message,
                };
                (self.status, Json(payload)).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "article 7 not found")]
    pub message: String,
}

/// Body of a 422 response: attribute name mapped to its messages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"title": ["can't be blank", "is too short (minimum is 2 characters)"]}))]
pub struct FieldErrorsResponse(pub BTreeMap<String, Vec<String>>);

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
