// src/presentation/http/extractors.rs
//
// Thin wrappers around axum's extractors whose rejections go through
// `HttpError` so clients always get the `{ "msg": ... }` shape.
use crate::application::{error::ApplicationError, validation::ListingParams};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde_json::Value;

use super::error::HttpError;

/// A JSON request body of any shape; key and type checks happen in
/// `application::validation`.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                HttpError::from_error(ApplicationError::invalid_payload(rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// The single dynamic segment of a route, still unparsed.
#[derive(Debug, Clone)]
pub struct PathParam(pub String);

impl<S> FromRequestParts<S> for PathParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(DomainError::MalformedIdentifier(rejection.body_text()).into())
            })?;
        Ok(Self(raw))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingQuery(pub ListingParams);

impl<S> FromRequestParts<S> for ListingQuery
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListingParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::malformed_value(rejection.body_text()))
            })?;
        Ok(Self(params))
    }
}
