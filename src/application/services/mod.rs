// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            topics::TopicCommandService,
        },
        guards::ExistenceGuard,
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        topic::TopicRepository,
        user::UserRepository,
    },
};

/// Every repository handed to the services. Built once at startup.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub topics: Arc<dyn TopicRepository>,
    pub users: Arc<dyn UserRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>) -> Self {
        let guard = Arc::new(ExistenceGuard::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.topics),
            Arc::clone(&repos.users),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&guard),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&guard),
            Arc::clone(&clock),
        ));
        let topic_commands = Arc::new(TopicCommandService::new(Arc::clone(&repos.topics)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
            Arc::clone(&guard),
        ));
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&repos.topics)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        Self {
            article_commands,
            comment_commands,
            topic_commands,
            article_queries,
            topic_queries,
            user_queries,
        }
    }
}
