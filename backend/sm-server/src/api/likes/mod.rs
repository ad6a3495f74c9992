pub mod create_like_request;
pub mod like_dto;
pub mod like_list_response;
pub mod like_response;
pub mod likes;
pub mod list_likes_query;
