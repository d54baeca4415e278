// src/bin/seed.rs
//
// Recreates the schema and loads a JSON fixture. Reads DATABASE_URL like the
// server does; SEED_PATH overrides the fixture location.
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use nc_news::config::AppConfig;
use nc_news::infrastructure::database;
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_SEED_PATH: &str = "db/data/development.json";

#[derive(Debug, Deserialize)]
struct Fixture {
    topics: Vec<TopicRow>,
    users: Vec<UserRow>,
    articles: Vec<ArticleRow>,
    comments: Vec<CommentRow>,
}

#[derive(Debug, Deserialize)]
struct TopicRow {
    slug: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct UserRow {
    username: String,
    name: String,
    avatar_url: String,
}

#[derive(Debug, Deserialize)]
struct ArticleRow {
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    votes: i32,
}

/// Comments point at their article by title since ids are assigned on insert.
#[derive(Debug, Deserialize)]
struct CommentRow {
    article_title: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    votes: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let seed_path = std::env::var("SEED_PATH").unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string());

    let raw = tokio::fs::read_to_string(&seed_path)
        .await
        .with_context(|| format!("reading fixture {seed_path}"))?;
    let fixture: Fixture =
        serde_json::from_str(&raw).with_context(|| format!("parsing fixture {seed_path}"))?;

    let pool = database::init_pool(
        config.database_url(),
        config.max_connections(),
        config.acquire_timeout(),
    )
    .await
    .context("connecting to database")?;

    database::reset_schema(&pool).await?;

    let mut tx = pool.begin().await?;

    for topic in &fixture.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("inserting topic {}", topic.slug))?;
    }

    for user in &fixture.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("inserting user {}", user.username))?;
    }

    let mut article_ids: HashMap<&str, i64> = HashMap::with_capacity(fixture.articles.len());
    for article in &fixture.articles {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING article_id",
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("inserting article {:?}", article.title))?;
        article_ids.insert(article.title.as_str(), id);
    }

    for comment in &fixture.comments {
        let article_id = article_ids
            .get(comment.article_title.as_str())
            .copied()
            .ok_or_else(|| anyhow!("comment refers to unknown article {:?}", comment.article_title))?;
        sqlx::query(
            "INSERT INTO comments (article_id, author, body, created_at, votes) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.votes)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("inserting comment on article {article_id}"))?;
    }

    tx.commit().await?;

    tracing::info!(
        topics = fixture.topics.len(),
        users = fixture.users.len(),
        articles = fixture.articles.len(),
        comments = fixture.comments.len(),
        path = %seed_path,
        "database seeded"
    );
    Ok(())
}
