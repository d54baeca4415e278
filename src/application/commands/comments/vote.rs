use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{
        comment::CommentId,
        errors::{DomainError, Resource},
        votes::VoteDelta,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct VoteCommentCommand {
    pub id: CommentId,
    pub delta: VoteDelta,
}

impl CommentCommandService {
    pub async fn vote_on_comment(
        &self,
        command: VoteCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        self.guard.comment(command.id).await?;

        let comment = self
            .repo
            .apply_vote(command.id, command.delta)
            .await?
            .ok_or(DomainError::NotFound(Resource::Comment))?;
        Ok(comment.into())
    }
}
