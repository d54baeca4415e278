// tests/support/memory.rs
//
// In-memory stand-in for the Postgres repositories. Foreign keys, cascades
// and the listing order behave the way the real schema does.
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use nc_news::application::ports::time::Clock;
use nc_news::domain::{
    article::{
        Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSummary,
        ArticleWriteRepository, NewArticle, PageWindow, SortColumn, SortOrder,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult, Resource},
    topic::{NewTopic, Topic, TopicRepository, TopicSlug},
    user::{User, UserRepository, Username},
    votes::VoteDelta,
};
use std::cmp::Ordering;
use std::sync::Mutex;

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
struct StoredArticle {
    id: i64,
    title: String,
    topic: TopicSlug,
    author: Username,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

#[derive(Default)]
struct State {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<StoredArticle>,
    comments: Vec<Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

impl State {
    fn comment_count(&self, article_id: i64) -> i64 {
        self.comments
            .iter()
            .filter(|c| c.article_id.0 == article_id)
            .count() as i64
    }

    fn article(&self, stored: &StoredArticle) -> Article {
        Article {
            id: ArticleId(stored.id),
            title: stored.title.clone(),
            topic: stored.topic.clone(),
            author: stored.author.clone(),
            body: stored.body.clone(),
            created_at: stored.created_at,
            votes: stored.votes,
            comment_count: self.comment_count(stored.id),
        }
    }

    fn has_topic(&self, slug: &TopicSlug) -> bool {
        self.topics.iter().any(|t| &t.slug == slug)
    }

    fn has_user(&self, username: &Username) -> bool {
        self.users.iter().any(|u| &u.username == username)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seven articles, eight comments:
    ///
    /// | id | topic | author        | created    | votes | comments |
    /// |----|-------|---------------|------------|-------|----------|
    /// | 1  | mitch | butter_bridge | 2020-07-09 | 100   | 5        |
    /// | 2  | mitch | icellusedkars | 2020-10-16 | 0     | 0        |
    /// | 3  | mitch | icellusedkars | 2020-11-03 | 0     | 2        |
    /// | 4  | mitch | rogersop      | 2020-05-06 | 0     | 0        |
    /// | 5  | cats  | rogersop      | 2020-08-03 | 0     | 1        |
    /// | 6  | mitch | icellusedkars | 2020-10-18 | 0     | 0        |
    /// | 7  | mitch | icellusedkars | 2020-01-07 | 0     | 0        |
    ///
    /// Topic `paper` and user `lurker` exist but own nothing.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut state = store.state.lock().unwrap();
            for (slug, description) in [
                ("mitch", "The man, the Mitch, the legend"),
                ("cats", "Not dogs"),
                ("paper", "what books are made of"),
            ] {
                state.topics.push(Topic {
                    slug: TopicSlug::new(slug),
                    description: description.into(),
                });
            }
            for (username, name) in [
                ("butter_bridge", "jonny"),
                ("icellusedkars", "sam"),
                ("rogersop", "paul"),
                ("lurker", "do_nothing"),
            ] {
                state.users.push(User {
                    username: Username::new(username),
                    name: name.into(),
                    avatar_url: format!("https://avatars.test/{username}.png"),
                });
            }

            let articles = [
                ("Living in the shadow of a great man", "mitch", "butter_bridge", at(2020, 7, 9), 100),
                ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", at(2020, 10, 16), 0),
                ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", at(2020, 11, 3), 0),
                ("Student SUES Mitch!", "mitch", "rogersop", at(2020, 5, 6), 0),
                ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", at(2020, 8, 3), 0),
                ("A", "mitch", "icellusedkars", at(2020, 10, 18), 0),
                ("Z", "mitch", "icellusedkars", at(2020, 1, 7), 0),
            ];
            for (title, topic, author, created_at, votes) in articles {
                state.next_article_id += 1;
                let id = state.next_article_id;
                state.articles.push(StoredArticle {
                    id,
                    title: title.into(),
                    topic: TopicSlug::new(topic),
                    author: Username::new(author),
                    body: format!("body of {title}"),
                    created_at,
                    votes,
                });
            }

            let comments = [
                (1, "butter_bridge", 16),
                (1, "butter_bridge", 14),
                (1, "icellusedkars", -100),
                (1, "icellusedkars", 0),
                (1, "icellusedkars", 0),
                (3, "icellusedkars", 20),
                (3, "butter_bridge", -100),
                (5, "butter_bridge", 1),
            ];
            for (article_id, author, votes) in comments {
                state.next_comment_id += 1;
                let id = state.next_comment_id;
                state.comments.push(Comment {
                    id: CommentId(id),
                    article_id: ArticleId(article_id),
                    author: Username::new(author),
                    body: format!("comment {id}"),
                    votes,
                    created_at: at(2020, 3, id as u32),
                });
            }
        }
        store
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_ids_for(&self, article_id: i64) -> Vec<i64> {
        self.state
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.article_id.0 == article_id)
            .map(|c| c.id.0)
            .collect()
    }
}

fn windowed<T>(items: Vec<T>, window: Option<PageWindow>) -> Vec<T> {
    match window {
        Some(window) => items
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit() as usize)
            .collect(),
        None => items,
    }
}

fn compare(a: &ArticleSummary, b: &ArticleSummary, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::ArticleId => a.id.cmp(&b.id),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
    .then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut state = self.state.lock().unwrap();
        if !state.has_topic(&article.topic) {
            return Err(DomainError::MissingReference(Resource::Topic));
        }
        if !state.has_user(&article.author) {
            return Err(DomainError::MissingReference(Resource::User));
        }
        state.next_article_id += 1;
        let id = state.next_article_id;
        state.articles.push(StoredArticle {
            id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: 0,
        });
        Ok(ArticleId(id))
    }

    async fn apply_vote(&self, id: ArticleId, delta: VoteDelta) -> DomainResult<Option<Article>> {
        let mut state = self.state.lock().unwrap();
        let Some(stored) = state.articles.iter_mut().find(|a| a.id == id.0) else {
            return Ok(None);
        };
        stored.votes = stored
            .votes
            .checked_add(delta.value())
            .ok_or_else(|| DomainError::MalformedValue("integer out of range".into()))?;
        let stored = stored.clone();
        Ok(Some(state.article(&stored)))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id.0);
        let removed = state.articles.len() != before;
        if removed {
            state.comments.retain(|c| c.article_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.id == id.0)
            .map(|a| state.article(a)))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().articles.iter().any(|a| a.id == id.0))
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<ArticleSummary> = state
            .articles
            .iter()
            .filter(|a| listing.topic.as_ref().is_none_or(|topic| &a.topic == topic))
            .map(|a| ArticleSummary {
                id: ArticleId(a.id),
                title: a.title.clone(),
                topic: a.topic.clone(),
                author: a.author.clone(),
                created_at: a.created_at,
                votes: a.votes,
                comment_count: state.comment_count(a.id),
                total_count: None,
            })
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = compare(a, b, listing.sort);
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = summaries.len() as i64;
        let mut page = windowed(summaries, listing.window);
        if listing.window.is_some() {
            for summary in &mut page {
                summary.total_count = Some(total);
            }
        }
        Ok(page)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.id);
        Ok(windowed(comments, window))
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().comments.iter().any(|c| c.id == id))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.iter().any(|a| a.id == comment.article_id.0) {
            return Err(DomainError::MissingReference(Resource::Article));
        }
        if !state.has_user(&comment.author) {
            return Err(DomainError::MissingReference(Resource::User));
        }
        state.next_comment_id += 1;
        let stored = Comment {
            id: CommentId(state.next_comment_id),
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Option<Comment>> {
        let mut state = self.state.lock().unwrap();
        let Some(comment) = state.comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        comment.votes = comment
            .votes
            .checked_add(delta.value())
            .ok_or_else(|| DomainError::MalformedValue("integer out of range".into()))?;
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        Ok(state.comments.len() != before)
    }
}

#[async_trait]
impl TopicRepository for MemoryStore {
    async fn list(&self, slug: Option<&TopicSlug>) -> DomainResult<Vec<Topic>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .topics
            .iter()
            .filter(|t| slug.is_none_or(|slug| &t.slug == slug))
            .cloned()
            .collect())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().has_topic(slug))
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let mut state = self.state.lock().unwrap();
        if state.has_topic(&topic.slug) {
            return Err(DomainError::Conflict(
                Some(Resource::Topic),
                format!("duplicate slug {}", topic.slug),
            ));
        }
        state.topics.push(topic.clone());
        Ok(topic)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn exists(&self, username: &Username) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().has_user(username))
    }
}

/// Every call fails like a lost database connection.
pub struct BrokenStore;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleReadRepository for BrokenStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn exists(&self, _id: ArticleId) -> DomainResult<bool> {
        broken()
    }

    async fn list(&self, _listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        broken()
    }
}
