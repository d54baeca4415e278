// src/application/guards.rs
//
// Pre-flight existence checks. They turn a missing parent row into a precise
// not-found error before the dependent statement runs.
use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::{CommentId, CommentRepository},
        errors::{DomainError, Resource},
        topic::{TopicRepository, TopicSlug},
        user::{UserRepository, Username},
    },
};

pub struct ExistenceGuard {
    articles: Arc<dyn ArticleReadRepository>,
    comments: Arc<dyn CommentRepository>,
    topics: Arc<dyn TopicRepository>,
    users: Arc<dyn UserRepository>,
}

impl ExistenceGuard {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        comments: Arc<dyn CommentRepository>,
        topics: Arc<dyn TopicRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            articles,
            comments,
            topics,
            users,
        }
    }

    pub async fn article(&self, id: ArticleId) -> ApplicationResult<()> {
        require(self.articles.exists(id).await?, Resource::Article)
    }

    pub async fn comment(&self, id: CommentId) -> ApplicationResult<()> {
        require(self.comments.exists(id).await?, Resource::Comment)
    }

    pub async fn topic(&self, slug: &TopicSlug) -> ApplicationResult<()> {
        require(self.topics.exists(slug).await?, Resource::Topic)
    }

    pub async fn user(&self, username: &Username) -> ApplicationResult<()> {
        require(self.users.exists(username).await?, Resource::User)
    }

    /// Topic is checked before author, so an article naming neither reports
    /// the missing topic.
    pub async fn article_references(
        &self,
        topic: &TopicSlug,
        author: &Username,
    ) -> ApplicationResult<()> {
        self.topic(topic).await?;
        self.user(author).await
    }
}

fn require(found: bool, resource: Resource) -> ApplicationResult<()> {
    if found {
        Ok(())
    } else {
        Err(DomainError::NotFound(resource).into())
    }
}
