pub mod create_post_request;
pub mod list_posts_query;
pub mod post_dto;
pub mod post_list_response;
pub mod post_response;
pub mod posts;
pub mod update_post_request;
