use std::sync::Arc;

use crate::{
    application::{guards::ExistenceGuard, ports::time::Clock},
    domain::comment::CommentRepository,
};

pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) guard: Arc<ExistenceGuard>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        repo: Arc<dyn CommentRepository>,
        guard: Arc<ExistenceGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, guard, clock }
    }
}
