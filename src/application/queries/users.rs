// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::{
        errors::{DomainError, Resource},
        user::{UserRepository, Username},
    },
};

pub struct GetUserQuery {
    pub username: Username,
}

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_username(&query.username)
            .await?
            .ok_or(DomainError::NotFound(Resource::User))?;
        Ok(user.into())
    }
}
