// src/presentation/http/controllers/users.rs
use crate::application::{dto::UserDto, queries::users::GetUserQuery};
use crate::domain::user::Username;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PathParam;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<UsersResponse>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(|users| Json(UsersResponse { users }))
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    PathParam(username): PathParam,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery {
            username: Username::new(username),
        })
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
