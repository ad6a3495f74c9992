pub mod create_user_request;
pub mod profile_image_query;
pub mod update_user_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
pub mod users;
