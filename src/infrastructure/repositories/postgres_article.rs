// src/infrastructure/repositories/postgres_article.rs
use super::listing::{ARTICLE_SUMMARY_COLUMNS, ARTICLES_WITH_COMMENTS, article_listing_query};
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSummary,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            title: row.title,
            topic: TopicSlug::new(row.topic),
            author: Username::new(row.author),
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
    #[sqlx(default)]
    total_count: Option<i64>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.article_id)?,
            title: row.title,
            topic: TopicSlug::new(row.topic),
            author: Username::new(row.author),
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
            total_count: row.total_count,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            topic,
            author,
            body,
            created_at,
        } = article;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (title, topic, author, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING article_id",
        )
        .bind(title)
        .bind(topic.as_str())
        .bind(author.as_str())
        .bind(body)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleId::new(id)
    }

    async fn apply_vote(&self, id: ArticleId, delta: VoteDelta) -> DomainResult<Option<Article>> {
        // One statement: the increment happens in the store, not read-modify-write.
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $1
                 WHERE article_id = $2
                 RETURNING article_id, title, topic, author, body, created_at, votes
             )
             SELECT updated.article_id, updated.title, updated.topic, updated.author,
                    updated.body, updated.created_at, updated.votes,
                    (SELECT COUNT(*) FROM comments
                      WHERE comments.article_id = updated.article_id) AS comment_count
             FROM updated",
        )
        .bind(i32::from(delta))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_SUMMARY_COLUMNS}, articles.body{ARTICLES_WITH_COMMENTS}
             WHERE articles.article_id = $1
             GROUP BY articles.article_id"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder = article_listing_query(listing);
        tracing::trace!(sql = builder.sql(), "article listing");

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }
}
