pub mod follow_list_response;
pub mod follow_request;
pub mod follow_response;
pub mod follows;
pub mod unfollow_response;
