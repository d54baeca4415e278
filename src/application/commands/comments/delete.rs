use super::CommentCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        comment::CommentId,
        errors::{DomainError, Resource},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteCommentCommand {
    pub id: CommentId,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        self.guard.comment(command.id).await?;

        if !self.repo.delete(command.id).await? {
            return Err(DomainError::NotFound(Resource::Comment).into());
        }
        Ok(())
    }
}
