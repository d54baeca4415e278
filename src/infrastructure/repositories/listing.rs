// src/infrastructure/repositories/listing.rs
//
// Statement builders for the two listing endpoints. Filter values and window
// bounds are always bound parameters; the only text spliced into ORDER BY
// comes from the fixed `SortColumn` -> expression table below.
use crate::domain::article::{ArticleId, ArticleListing, PageWindow, SortColumn};
use sqlx::{Postgres, QueryBuilder};

pub(super) const ARTICLE_SUMMARY_COLUMNS: &str = "articles.article_id, articles.title, \
     articles.topic, articles.author, articles.created_at, articles.votes, \
     COUNT(comments.comment_id) AS comment_count";

pub(super) const ARTICLES_WITH_COMMENTS: &str =
    " FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

pub(super) const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

fn sort_expression(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Title => "articles.title",
        SortColumn::Topic => "articles.topic",
        SortColumn::Author => "articles.author",
        SortColumn::ArticleId => "articles.article_id",
        SortColumn::CreatedAt => "articles.created_at",
        SortColumn::Votes => "articles.votes",
        SortColumn::CommentCount => "comment_count",
    }
}

pub fn article_listing_query(listing: &ArticleListing) -> QueryBuilder<'_, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
    builder.push(ARTICLE_SUMMARY_COLUMNS);
    if listing.window.is_some() {
        // Evaluated after grouping, so it counts articles rather than joined rows.
        builder.push(", COUNT(*) OVER () AS total_count");
    }
    builder.push(ARTICLES_WITH_COMMENTS);

    if let Some(topic) = &listing.topic {
        builder.push(" WHERE articles.topic = ");
        builder.push_bind(topic.as_str());
    }

    builder.push(" GROUP BY articles.article_id");

    let direction = listing.order.as_sql();
    builder.push(" ORDER BY ");
    builder.push(sort_expression(listing.sort));
    builder.push(" ");
    builder.push(direction);
    if listing.sort != SortColumn::ArticleId {
        // Tie-breaker keeps the order total so windows never overlap.
        builder.push(", articles.article_id ");
        builder.push(direction);
    }

    if let Some(window) = listing.window {
        push_window(&mut builder, window);
    }
    builder
}

/// Comments come back in insertion order; sorting is not configurable.
pub fn comment_listing_query(
    article_id: ArticleId,
    window: Option<PageWindow>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
    builder.push(COMMENT_COLUMNS);
    builder.push(" FROM comments WHERE article_id = ");
    builder.push_bind(i64::from(article_id));
    builder.push(" ORDER BY comment_id ASC");

    if let Some(window) = window {
        push_window(&mut builder, window);
    }
    builder
}

fn push_window(builder: &mut QueryBuilder<'_, Postgres>, window: PageWindow) {
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(window.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(window.offset()).unwrap_or(i64::MAX));
}
