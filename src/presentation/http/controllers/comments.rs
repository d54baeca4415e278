// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::DeleteCommentCommand, dto::CommentDto, validation};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{PathParam, Payload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

/// Mounted under `/api/articles/{article_id}/comments`.
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    PathParam(raw_article_id): PathParam,
    payload: Result<Payload, HttpError>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let article_id = validation::article_id(&raw_article_id).into_http()?;
    let Payload(payload) = payload?;
    let command = validation::create_comment(article_id, payload).into_http()?;

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn vote_on_comment(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
    payload: Result<Payload, HttpError>,
) -> HttpResult<Json<CommentResponse>> {
    let id = validation::comment_id(&raw_id).into_http()?;
    let Payload(payload) = payload?;
    let command = validation::vote_on_comment(id, &payload).into_http()?;

    state
        .services
        .comment_commands
        .vote_on_comment(command)
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
) -> HttpResult<StatusCode> {
    let id = validation::comment_id(&raw_id).into_http()?;

    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
