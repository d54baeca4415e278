// src/application/validation.rs
//
// Pure checks on path segments, query strings and JSON bodies. Nothing here
// touches storage; existence of referenced rows is left to `guards`.
use crate::{
    application::{
        commands::{
            articles::{CreateArticleCommand, VoteArticleCommand},
            comments::{CreateCommentCommand, VoteCommentCommand},
            topics::CreateTopicCommand,
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleListing, PageWindow, SortColumn, SortOrder},
        comment::CommentId,
        errors::{DomainError, PageParam},
        topic::TopicSlug,
        user::Username,
        votes::VoteDelta,
    },
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

/// Raw listing query string. Every field stays a string so that each one can
/// fail with its own error kind instead of a generic rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub topic: Option<String>,
    pub sortby: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl ListingParams {
    pub fn topic(&self) -> Option<&str> {
        present(&self.topic)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CommentPayload {
    username: String,
    body: String,
}

#[derive(Deserialize)]
struct ArticlePayload {
    author: String,
    title: String,
    body: String,
    topic: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicPayload {
    slug: String,
    description: String,
}

const VOTE_KEY: &str = "inc_votes";

pub fn article_id(raw: &str) -> ApplicationResult<ArticleId> {
    Ok(ArticleId::new(parse_identifier(raw)?)?)
}

pub fn comment_id(raw: &str) -> ApplicationResult<CommentId> {
    Ok(CommentId::new(parse_identifier(raw)?)?)
}

fn parse_identifier(raw: &str) -> Result<i64, DomainError> {
    raw.parse::<i64>()
        .map_err(|_| DomainError::MalformedIdentifier(raw.to_string()))
}

pub fn create_comment(
    article_id: ArticleId,
    payload: Value,
) -> ApplicationResult<CreateCommentCommand> {
    let CommentPayload { username, body } = decode(payload, "comment")?;
    Ok(CreateCommentCommand {
        article_id,
        author: Username::new(username),
        body,
    })
}

pub fn create_article(payload: Value) -> ApplicationResult<CreateArticleCommand> {
    let ArticlePayload {
        author,
        title,
        body,
        topic,
    } = decode(payload, "article")?;
    Ok(CreateArticleCommand {
        author: Username::new(author),
        title,
        body,
        topic: TopicSlug::new(topic),
    })
}

pub fn create_topic(payload: Value) -> ApplicationResult<CreateTopicCommand> {
    let TopicPayload { slug, description } = decode(payload, "topic")?;
    Ok(CreateTopicCommand {
        slug: TopicSlug::new(slug),
        description,
    })
}

pub fn vote_on_article(id: ArticleId, payload: &Value) -> ApplicationResult<VoteArticleCommand> {
    Ok(VoteArticleCommand {
        id,
        delta: vote_delta(payload)?,
    })
}

pub fn vote_on_comment(id: CommentId, payload: &Value) -> ApplicationResult<VoteCommentCommand> {
    Ok(VoteCommentCommand {
        id,
        delta: vote_delta(payload)?,
    })
}

/// The body must be exactly `{"inc_votes": <integer>}`. A wrong key is a shape
/// problem; a wrong value type (including numeric strings) is a malformed value.
pub fn vote_delta(payload: &Value) -> ApplicationResult<VoteDelta> {
    let object = payload
        .as_object()
        .ok_or_else(|| ApplicationError::invalid_payload("vote body must be an object"))?;

    let value = match object.get(VOTE_KEY) {
        Some(value) if object.len() == 1 => value,
        _ => {
            return Err(ApplicationError::invalid_payload(format!(
                "vote body must contain only `{VOTE_KEY}`"
            )));
        }
    };

    value
        .as_i64()
        .and_then(|delta| i32::try_from(delta).ok())
        .map(VoteDelta::new)
        .ok_or_else(|| {
            ApplicationError::malformed_value(format!("{VOTE_KEY} must be an integer, got {value}"))
        })
}

/// Checks run in a fixed order: sort column, direction, limit, page.
pub fn article_listing(params: &ListingParams) -> ApplicationResult<ArticleListing> {
    let sort = present(&params.sortby)
        .map(SortColumn::parse)
        .transpose()?
        .unwrap_or_default();
    let order = present(&params.order)
        .map(SortOrder::parse)
        .transpose()?
        .unwrap_or_default();
    let window = page_window(params)?;

    Ok(ArticleListing {
        topic: params.topic().map(TopicSlug::new),
        sort,
        order,
        window,
    })
}

/// `p` is validated even without `limit`, but only takes effect alongside it.
pub fn page_window(params: &ListingParams) -> ApplicationResult<Option<PageWindow>> {
    let limit = present(&params.limit)
        .map(|raw| parse_positive(raw, PageParam::Limit))
        .transpose()?;
    let page = present(&params.p)
        .map(|raw| parse_positive(raw, PageParam::Page))
        .transpose()?;

    match limit {
        Some(limit) => Ok(Some(PageWindow::new(limit, page.unwrap_or(1))?)),
        None => Ok(None),
    }
}

fn parse_positive(raw: &str, param: PageParam) -> Result<u32, DomainError> {
    raw.parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| DomainError::InvalidPagination(param, raw.to_string()))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}

/// Only JSON objects are accepted; serde would otherwise read a struct from an array.
fn decode<T: DeserializeOwned>(payload: Value, what: &str) -> ApplicationResult<T> {
    if !payload.is_object() {
        return Err(ApplicationError::invalid_payload(format!(
            "{what} body must be an object"
        )));
    }
    serde_json::from_value(payload)
        .map_err(|err| ApplicationError::invalid_payload(format!("{what} body: {err}")))
}
