pub mod auth;
pub mod comments;
pub mod content;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod follows;
pub mod likes;
pub mod page_query;
pub mod posts;
pub mod users;
