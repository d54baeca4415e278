use crate::domain::article::entity::{Article, ArticleSummary, NewArticle};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Adds `delta` to the stored vote count. `None` when no such article exists.
    async fn apply_vote(&self, id: ArticleId, delta: VoteDelta) -> DomainResult<Option<Article>>;
    /// Removes the article and its comments. Returns `false` when nothing was deleted.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>>;
}
