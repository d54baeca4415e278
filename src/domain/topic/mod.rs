pub mod entity;
pub mod repository;

pub use entity::{NewTopic, Topic, TopicSlug};
pub use repository::TopicRepository;
