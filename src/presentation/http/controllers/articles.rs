// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    dto::{ArticleDto, ArticleSummaryDto, CommentDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery, ListCommentsQuery},
    validation,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ListingQuery, PathParam, Payload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ListingQuery(params): ListingQuery,
) -> HttpResult<Json<ArticlesResponse>> {
    let listing = validation::article_listing(&params).into_http()?;

    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { listing })
        .await
        .into_http()?;

    Ok(Json(ArticlesResponse { articles }))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
) -> HttpResult<Json<ArticleResponse>> {
    let id = validation::article_id(&raw_id).into_http()?;

    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = validation::create_article(payload).into_http()?;

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

pub async fn vote_on_article(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
    payload: Result<Payload, HttpError>,
) -> HttpResult<Json<ArticleResponse>> {
    // A bad id outranks a bad body.
    let id = validation::article_id(&raw_id).into_http()?;
    let Payload(payload) = payload?;
    let command = validation::vote_on_article(id, &payload).into_http()?;

    state
        .services
        .article_commands
        .vote_on_article(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
) -> HttpResult<StatusCode> {
    let id = validation::article_id(&raw_id).into_http()?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    PathParam(raw_id): PathParam,
    ListingQuery(params): ListingQuery,
) -> HttpResult<Json<CommentsResponse>> {
    let article_id = validation::article_id(&raw_id).into_http()?;
    let window = validation::page_window(&params).into_http()?;

    let comments = state
        .services
        .article_queries
        .list_comments(ListCommentsQuery { article_id, window })
        .await
        .into_http()?;

    Ok(Json(CommentsResponse { comments }))
}
