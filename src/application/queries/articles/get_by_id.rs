use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        errors::{DomainError, Resource},
    },
};

pub struct GetArticleByIdQuery {
    pub id: ArticleId,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(query.id)
            .await?
            .ok_or(DomainError::NotFound(Resource::Article))?;
        Ok(article.into())
    }
}
