// src/presentation/http/controllers/topics.rs
use crate::application::{dto::TopicDto, queries::topics::ListTopicsQuery, validation};
use crate::domain::topic::TopicSlug;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ListingQuery, Payload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub topic: TopicDto,
}

/// `?topic=<slug>` narrows the list to that one topic.
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
    ListingQuery(params): ListingQuery,
) -> HttpResult<Json<TopicsResponse>> {
    let query = ListTopicsQuery {
        slug: params.topic().map(TopicSlug::new),
    };

    let topics = state
        .services
        .topic_queries
        .list_topics(query)
        .await
        .into_http()?;

    Ok(Json(TopicsResponse { topics }))
}

pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload,
) -> HttpResult<(StatusCode, Json<TopicResponse>)> {
    let command = validation::create_topic(payload).into_http()?;

    let topic = state
        .services
        .topic_commands
        .create_topic(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
