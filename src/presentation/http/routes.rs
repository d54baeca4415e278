// src/presentation/http/routes.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::controllers::{api, articles, comments, topics, users};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, Uri},
    routing::{get, patch},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, &[])
}

/// An empty origin list allows any origin.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api", get(api::list_endpoints))
        .route(
            "/api/topics",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article)
                .patch(articles::vote_on_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(articles::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comments::vote_on_comment).delete(comments::delete_comment),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user))
        .fallback(link_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn link_not_found(uri: Uri) -> HttpError {
    HttpError::from_error(ApplicationError::route_not_found(uri.path()))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
