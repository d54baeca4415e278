use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        errors::{DomainError, Resource},
        votes::VoteDelta,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct VoteArticleCommand {
    pub id: ArticleId,
    pub delta: VoteDelta,
}

impl ArticleCommandService {
    pub async fn vote_on_article(
        &self,
        command: VoteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.guard.article(command.id).await?;

        // The row can still disappear between the guard and the update.
        let article = self
            .write_repo
            .apply_vote(command.id, command.delta)
            .await?
            .ok_or(DomainError::NotFound(Resource::Article))?;
        Ok(article.into())
    }
}
