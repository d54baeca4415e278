// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// The stored resources a domain error can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Article,
    Comment,
    Topic,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Article => "article",
            Resource::Comment => "comment",
            Resource::Topic => "topic",
            Resource::User => "user",
        })
    }
}

/// Which pagination query parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParam {
    Limit,
    Page,
}

impl fmt::Display for PageParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PageParam::Limit => "limit",
            PageParam::Page => "page",
        })
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(String),
    #[error("malformed value: {0}")]
    MalformedValue(String),
    #[error("missing required value: {0}")]
    MissingValue(String),
    #[error("invalid sort column: {0}")]
    InvalidSortColumn(String),
    #[error("invalid order direction: {0}")]
    InvalidOrderDirection(String),
    #[error("invalid {0} value: {1}")]
    InvalidPagination(PageParam, String),
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("referenced {0} does not exist")]
    MissingReference(Resource),
    /// A uniqueness violation; the resource is known when the constraint is.
    #[error("conflict: {1}")]
    Conflict(Option<Resource>, String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
