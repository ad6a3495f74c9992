use crate::{
    AppState, create_comment, create_like, create_post, create_user, delete_comment, delete_like,
    delete_post, delete_user, follow_user, get_comment, get_post, get_user, health, list_comments,
    list_followers, list_following, list_likes, list_my_following, list_posts, list_users, login,
    unfollow_user, update_comment, update_post, update_user, upload_profile_image,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.media.max_upload_bytes;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Auth
        .route("/api/v1/auth/login", post(login))
        // Users
        .route("/api/v1/users", get(list_users).post(create_user))
        .route(
            "/api/v1/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/api/v1/users/{id}/profile-image",
            put(upload_profile_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/users/{id}/followers", get(list_followers))
        .route("/api/v1/users/{id}/following", get(list_following))
        // Posts
        .route("/api/v1/posts", get(list_posts).post(create_post))
        .route(
            "/api/v1/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        // Comments
        .route("/api/v1/comments", get(list_comments).post(create_comment))
        .route(
            "/api/v1/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        // Likes
        .route("/api/v1/likes", get(list_likes).post(create_like))
        .route("/api/v1/likes/{id}", delete(delete_like))
        // Follow graph
        .route("/api/v1/follows", get(list_my_following).post(follow_user))
        .route("/api/v1/unfollows", post(unfollow_user))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
