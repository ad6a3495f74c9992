pub mod comment_dto;
pub mod comment_list_response;
pub mod comment_response;
pub mod comments;
pub mod create_comment_request;
pub mod list_comments_query;
pub mod update_comment_request;
