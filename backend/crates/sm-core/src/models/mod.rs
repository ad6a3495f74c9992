pub mod comment;
pub mod follow_edge;
pub mod like;
pub mod new_user;
pub mod post;
pub mod user;
