use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::topic::{NewTopic, Topic, TopicRepository, TopicSlug};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    slug: String,
    description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic {
            slug: TopicSlug::new(row.slug),
            description: row.description,
        }
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn list(&self, slug: Option<&TopicSlug>) -> DomainResult<Vec<Topic>> {
        let rows = match slug {
            Some(slug) => {
                sqlx::query_as::<_, TopicRow>(
                    "SELECT slug, description FROM topics WHERE slug = $1",
                )
                .bind(slug.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TopicRow>("SELECT slug, description FROM topics ORDER BY slug")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let row = sqlx::query_as::<_, TopicRow>(
            "INSERT INTO topics (slug, description) VALUES ($1, $2)
             RETURNING slug, description",
        )
        .bind(topic.slug.as_str())
        .bind(&topic.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
