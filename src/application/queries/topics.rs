// src/application/queries/topics.rs
use std::sync::Arc;

use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::{
        errors::{DomainError, Resource},
        topic::{TopicRepository, TopicSlug},
    },
};

pub struct ListTopicsQuery {
    pub slug: Option<TopicSlug>,
}

pub struct TopicQueryService {
    repo: Arc<dyn TopicRepository>,
}

impl TopicQueryService {
    pub fn new(repo: Arc<dyn TopicRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_topics(&self, query: ListTopicsQuery) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.repo.list(query.slug.as_ref()).await?;
        if query.slug.is_some() && topics.is_empty() {
            return Err(DomainError::NotFound(Resource::Topic).into());
        }
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
