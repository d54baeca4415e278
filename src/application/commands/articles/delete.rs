// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::ArticleId,
        errors::{DomainError, Resource},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        self.guard.article(command.id).await?;

        if !self.write_repo.delete(command.id).await? {
            return Err(DomainError::NotFound(Resource::Article).into());
        }
        tracing::debug!(article_id = %command.id, "article deleted");
        Ok(())
    }
}
