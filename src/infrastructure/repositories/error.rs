use crate::domain::errors::{DomainError, Resource};

const CNT_TOPIC_SLUG: &str = "topics_pkey";
const CNT_ARTICLE_TOPIC: &str = "articles_topic_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const NOT_NULL_VIOLATION: &str = "23502";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => classify(
            db_err.code().as_deref(),
            db_err.constraint(),
            db_err.message(),
        ),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Named constraints win over bare SQLSTATE codes.
fn classify(code: Option<&str>, constraint: Option<&str>, message: &str) -> DomainError {
    if let Some(constraint) = constraint {
        match constraint {
            CNT_TOPIC_SLUG => {
                return DomainError::Conflict(Some(Resource::Topic), message.to_string());
            }
            CNT_ARTICLE_TOPIC => return DomainError::MissingReference(Resource::Topic),
            CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => {
                return DomainError::MissingReference(Resource::User);
            }
            CNT_COMMENT_ARTICLE => return DomainError::MissingReference(Resource::Article),
            _ => {}
        }
    }

    match code {
        // A vote pushing a counter past the column's range is the client's doing.
        Some(INVALID_TEXT_REPRESENTATION | NUMERIC_VALUE_OUT_OF_RANGE) => {
            DomainError::MalformedValue(message.to_string())
        }
        Some(NOT_NULL_VIOLATION) => DomainError::MissingValue(message.to_string()),
        // Unnamed foreign keys only ever point at users in this schema's callers.
        Some(FOREIGN_KEY_VIOLATION) => DomainError::MissingReference(Resource::User),
        Some(UNIQUE_VIOLATION) => DomainError::Conflict(None, message.to_string()),
        _ => DomainError::Persistence(message.to_string()),
    }
}
