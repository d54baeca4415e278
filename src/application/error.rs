// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid payload: {0}")]
    InvalidPayloadShape(String),

    #[error("malformed value: {0}")]
    MalformedValue(String),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayloadShape(msg.into())
    }

    pub fn malformed_value(msg: impl Into<String>) -> Self {
        Self::MalformedValue(msg.into())
    }

    pub fn route_not_found(msg: impl Into<String>) -> Self {
        Self::RouteNotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
