use std::sync::Arc;

use crate::{
    application::guards::ExistenceGuard,
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) guard: Arc<ExistenceGuard>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        guard: Arc<ExistenceGuard>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            guard,
        }
    }
}
