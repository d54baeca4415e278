// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, PageParam, Resource};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const BAD_REQUEST: &str = "bad request";
pub const INVALID_INPUT: &str = "invalid user input";
pub const INVALID_USERNAME: &str = "invalid username";
pub const LINK_NOT_FOUND: &str = "link not found";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: &'static str,
}

impl HttpError {
    /// Maps every error kind to its externally visible status and message.
    /// Arms are tested top to bottom; anything unrecognised ends up as a
    /// logged 500 whose body never carries the underlying detail.
    pub fn from_error(err: ApplicationError) -> Self {
        use DomainError as D;

        match err {
            ApplicationError::Domain(D::MalformedIdentifier(_) | D::MalformedValue(_))
            | ApplicationError::MalformedValue(_) => Self::new(StatusCode::BAD_REQUEST, BAD_REQUEST),
            ApplicationError::InvalidPayloadShape(_) | ApplicationError::Domain(D::MissingValue(_)) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUT)
            }
            ApplicationError::Domain(D::InvalidSortColumn(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid sort query")
            }
            ApplicationError::Domain(D::InvalidOrderDirection(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid order query")
            }
            ApplicationError::Domain(D::InvalidPagination(PageParam::Limit, _)) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid limit query")
            }
            ApplicationError::Domain(D::InvalidPagination(PageParam::Page, _)) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid page query")
            }
            // A user rejected by a foreign key is only possible when creating a comment.
            ApplicationError::Domain(D::MissingReference(Resource::User)) => {
                Self::new(StatusCode::UNAUTHORIZED, INVALID_USERNAME)
            }
            ApplicationError::Domain(D::NotFound(resource) | D::MissingReference(resource)) => {
                Self::new(StatusCode::NOT_FOUND, not_found_message(resource))
            }
            ApplicationError::Domain(D::Conflict(resource, detail)) => {
                tracing::debug!(%detail, "conflicting write");
                Self::new(StatusCode::CONFLICT, conflict_message(resource))
            }
            ApplicationError::RouteNotFound(_) => Self::new(StatusCode::NOT_FOUND, LINK_NOT_FOUND),
            err @ (ApplicationError::Infrastructure(_) | ApplicationError::Domain(D::Persistence(_))) => {
                tracing::error!(error = %err, "unhandled error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        }
    }

    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

fn not_found_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Article => "article not found",
        Resource::Comment => "comment not found",
        Resource::Topic => "topic not found",
        Resource::User => "no such user",
    }
}

fn conflict_message(resource: Option<Resource>) -> &'static str {
    match resource {
        Some(Resource::Article) => "article already exists",
        Some(Resource::Comment) => "comment already exists",
        Some(Resource::Topic) => "topic already exists",
        Some(Resource::User) => "user already exists",
        None => "already exists",
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { msg: self.message })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    msg: &'static str,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
