use crate::domain::article::{ArticleId, PageWindow};
use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one article in insertion order, optionally windowed.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Comment>>;

    async fn exists(&self, id: CommentId) -> DomainResult<bool>;

    /// Fails with `DomainError::MissingReference(Resource::User)` when the
    /// author is unknown to the store.
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Option<Comment>>;

    async fn delete(&self, id: CommentId) -> DomainResult<bool>;
}
