use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            topic: article.topic.into_inner(),
            author: article.author.into_inner(),
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            comment_count: article.comment_count,
        }
    }
}

/// Listing row; the body is left out and `total_count` only appears on
/// paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleSummaryDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            article_id: summary.id.into(),
            title: summary.title,
            topic: summary.topic.into_inner(),
            author: summary.author.into_inner(),
            created_at: summary.created_at,
            votes: summary.votes,
            comment_count: summary.comment_count,
            total_count: summary.total_count,
        }
    }
}
