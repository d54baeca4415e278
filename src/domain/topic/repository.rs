use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{NewTopic, Topic, TopicSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// All topics, or only the one matching `slug` when given.
    async fn list(&self, slug: Option<&TopicSlug>) -> DomainResult<Vec<Topic>>;

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool>;

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;
}
