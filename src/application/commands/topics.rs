// src/application/commands/topics.rs
use std::sync::Arc;

use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::{Topic, TopicRepository, TopicSlug},
};

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    pub slug: TopicSlug,
    pub description: String,
}

pub struct TopicCommandService {
    repo: Arc<dyn TopicRepository>,
}

impl TopicCommandService {
    pub fn new(repo: Arc<dyn TopicRepository>) -> Self {
        Self { repo }
    }

    /// Duplicate slugs surface from the store as a conflict.
    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<TopicDto> {
        let topic = self
            .repo
            .insert(Topic {
                slug: command.slug,
                description: command.description,
            })
            .await?;
        Ok(topic.into())
    }
}
