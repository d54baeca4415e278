use super::ArticleQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::article::{ArticleId, PageWindow},
};

pub struct ListCommentsQuery {
    pub article_id: ArticleId,
    pub window: Option<PageWindow>,
}

impl ArticleQueryService {
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        self.guard.article(query.article_id).await?;

        let comments = self
            .comment_repo
            .list_for_article(query.article_id, query.window)
            .await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
