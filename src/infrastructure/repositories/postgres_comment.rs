// src/infrastructure/repositories/postgres_comment.rs
use super::listing::{COMMENT_COLUMNS, comment_listing_query};
use super::map_sqlx;
use crate::domain::article::{ArticleId, PageWindow};
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.comment_id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: Username::new(row.author),
            body: row.body,
            votes: row.votes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Comment>> {
        let rows = comment_listing_query(article_id, window)
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM comments WHERE comment_id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
            created_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (article_id, author, body, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(article_id))
            .bind(author.as_str())
            .bind(body)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Option<Comment>> {
        let sql = format!(
            "UPDATE comments SET votes = votes + $1
             WHERE comment_id = $2
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i32::from(delta))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
