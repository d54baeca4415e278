pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, NewArticle};
pub use listing::{ArticleListing, PageWindow, SortColumn, SortOrder};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleId;
