// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::NewArticle,
        errors::{DomainError, Resource},
        topic::TopicSlug,
        user::Username,
    },
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub author: Username,
    pub title: String,
    pub body: String,
    pub topic: TopicSlug,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.guard
            .article_references(&command.topic, &command.author)
            .await?;

        let new_article = NewArticle {
            title: command.title,
            topic: command.topic,
            author: command.author,
            body: command.body,
            created_at: self.clock.now(),
        };

        let id = self.write_repo.insert(new_article).await?;
        tracing::debug!(article_id = %id, "article created");

        // Re-read so the response carries the stored defaults and comment count.
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(Resource::Article))?;
        Ok(article.into())
    }
}
