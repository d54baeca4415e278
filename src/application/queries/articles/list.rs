// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::article::ArticleListing,
};

pub struct ListArticlesQuery {
    pub listing: ArticleListing,
}

impl ArticleQueryService {
    /// A topic filter naming an unknown topic is a not-found; a known topic
    /// without articles yields an empty list.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        if let Some(topic) = &query.listing.topic {
            self.guard.topic(topic).await?;
        }

        let summaries = self.read_repo.list(&query.listing).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
