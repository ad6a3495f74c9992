pub mod api;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{auth::login, login_request::LoginRequest},
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{create_comment, delete_comment, get_comment, list_comments, update_comment},
        create_comment_request::CreateCommentRequest,
        list_comments_query::ListCommentsQuery,
        update_comment_request::UpdateCommentRequest,
    },
    content::{MAX_CONTENT_LENGTH, validate_content},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::{USER_ID_HEADER, UserId},
    follows::{
        follow_list_response::FollowListResponse,
        follow_request::FollowRequest,
        follow_response::FollowResponse,
        follows::{follow_user, list_followers, list_following, list_my_following, unfollow_user},
        unfollow_response::UnfollowResponse,
    },
    likes::{
        create_like_request::CreateLikeRequest,
        like_dto::LikeDto,
        like_list_response::LikeListResponse,
        like_response::LikeResponse,
        likes::{create_like, delete_like, list_likes},
        list_likes_query::ListLikesQuery,
    },
    page_query::PageQuery,
    posts::{
        create_post_request::CreatePostRequest,
        list_posts_query::ListPostsQuery,
        post_dto::PostDto,
        post_list_response::PostListResponse,
        post_response::PostResponse,
        posts::{create_post, delete_post, find_post, get_post, list_posts, update_post},
        update_post_request::UpdatePostRequest,
    },
    users::{
        create_user_request::CreateUserRequest,
        profile_image_query::ProfileImageQuery,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{
            create_user, delete_user, get_user, list_users, update_user, upload_profile_image,
        },
    },
};

pub use crate::routes::build_router;
pub use crate::state::{AppState, MediaSettings};
