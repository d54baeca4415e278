// src/domain/article/listing.rs
//
// Structured description of an article listing request. Repositories turn it
// into SQL; nothing here is ever interpolated from raw user input.
use crate::domain::errors::{DomainError, DomainResult, PageParam};
use crate::domain::topic::TopicSlug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Title,
    Topic,
    Author,
    ArticleId,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::ArticleId,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    /// Exact, case-sensitive match against the allow-list.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == raw)
            .ok_or_else(|| DomainError::InvalidSortColumn(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::ArticleId => "article_id",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(DomainError::InvalidOrderDirection(raw.to_string()))
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A `LIMIT`/`OFFSET` window. Both values are at least one; pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: u32,
    page: u32,
}

impl PageWindow {
    pub fn new(limit: u32, page: u32) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::InvalidPagination(
                PageParam::Limit,
                limit.to_string(),
            ));
        }
        if page == 0 {
            return Err(DomainError::InvalidPagination(
                PageParam::Page,
                page.to_string(),
            ));
        }
        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListing {
    pub topic: Option<TopicSlug>,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub window: Option<PageWindow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_accepts_only_allow_listed_names() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::parse(column.as_str()).unwrap(), column);
        }
        assert!(matches!(
            SortColumn::parse("lemons"),
            Err(DomainError::InvalidSortColumn(raw)) if raw == "lemons"
        ));
        assert!(SortColumn::parse("Title").is_err());
        assert!(SortColumn::parse("votes; DROP TABLE articles").is_err());
    }

    #[test]
    fn sort_order_is_case_insensitive() {
        assert_eq!(SortOrder::parse("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc").unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DeSc").unwrap(), SortOrder::Desc);
        assert!(matches!(
            SortOrder::parse("right"),
            Err(DomainError::InvalidOrderDirection(_))
        ));
    }

    #[test]
    fn page_window_offsets() {
        assert_eq!(PageWindow::new(10, 1).unwrap().offset(), 0);
        assert_eq!(PageWindow::new(2, 2).unwrap().offset(), 2);
        assert_eq!(PageWindow::new(5, 3).unwrap().offset(), 10);
    }

    #[test]
    fn page_window_rejects_zero() {
        assert!(matches!(
            PageWindow::new(0, 1),
            Err(DomainError::InvalidPagination(PageParam::Limit, _))
        ));
        assert!(matches!(
            PageWindow::new(3, 0),
            Err(DomainError::InvalidPagination(PageParam::Page, _))
        ));
    }

    #[test]
    fn default_listing_sorts_newest_first() {
        let listing = ArticleListing::default();
        assert_eq!(listing.sort, SortColumn::CreatedAt);
        assert_eq!(listing.order, SortOrder::Desc);
        assert!(listing.topic.is_none());
        assert!(listing.window.is_none());
    }
}
