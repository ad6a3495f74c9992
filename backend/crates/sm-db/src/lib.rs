pub mod connection;
pub mod error;
pub mod follow_store;
pub mod repositories;

mod row;

pub use connection::database::{connect, connect_in_memory, migrate};
pub use error::{DbError, Result};
pub use follow_store::SqliteFollowStore;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::follow_repository::FollowRepository;
pub use repositories::like_repository::LikeRepository;
pub use repositories::post_repository::{PostRepository, PostStats};
pub use repositories::user_repository::UserRepository;
