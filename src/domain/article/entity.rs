// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// A full article row together with its derived comment count.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// One row of an article listing. `total_count` is the size of the whole
/// filtered set and is only present when the listing was paginated.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
