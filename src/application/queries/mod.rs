pub mod articles;
pub mod topics;
pub mod users;
