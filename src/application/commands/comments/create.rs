// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{article::ArticleId, comment::NewComment, user::Username},
};

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub article_id: ArticleId,
    pub author: Username,
    pub body: String,
}

impl CommentCommandService {
    /// An unknown author is not pre-checked: the store's foreign key rejects
    /// it and the repository reports a missing user reference.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        self.guard.article(command.article_id).await?;

        let comment = self
            .repo
            .insert(NewComment {
                article_id: command.article_id,
                author: command.author,
                body: command.body,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::debug!(comment_id = %comment.id, article_id = %comment.article_id, "comment created");
        Ok(comment.into())
    }
}
