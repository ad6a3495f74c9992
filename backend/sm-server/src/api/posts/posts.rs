//! Post REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreatePostRequest, DeleteResponse, ListPostsQuery, PostDto,
    PostListResponse, PostResponse, UpdatePostRequest, UserId, validate_content,
};

use sm_core::{Post, parse_uuid};
use sm_db::PostRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// GET /api/v1/posts?author_id=&limit=&offset=
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> ApiResult<Json<PostListResponse>> {
    let page = query.page()?;
    let author_id = query
        .author_id
        .as_deref()
        .map(|id| parse_uuid(id, "author_id"))
        .transpose()?;

    let repo = PostRepository::new(state.pool.clone());
    let posts = repo.list(author_id, page).await?;

    let mut dtos = Vec::with_capacity(posts.len());
    for post in posts {
        let stats = repo.stats(post.id).await?;
        dtos.push(PostDto::new(post, stats));
    }

    Ok(Json(PostListResponse { posts: dtos }))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;

    let repo = PostRepository::new(state.pool.clone());
    let post = find_post(&repo, post_uuid).await?;
    let stats = repo.stats(post.id).await?;

    Ok(Json(PostResponse {
        post: PostDto::new(post, stats),
    }))
}

/// POST /api/v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let content = validate_content(&req.content)?;
    let post = Post::new(user_id, content);

    let repo = PostRepository::new(state.pool.clone());
    repo.create(&post).await?;

    log::info!("Created post {} by user {} via REST API", post.id, user_id);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            post: PostDto::new(post, Default::default()),
        }),
    ))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(post_id): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;
    let content = validate_content(&req.content)?;

    let repo = PostRepository::new(state.pool.clone());
    let mut post = find_post(&repo, post_uuid).await?;

    if post.author_id != user_id {
        return Err(ApiError::forbidden("You can only edit your own posts"));
    }

    post.content = content;
    post.updated_at = Utc::now();

    if !repo.update(&post).await? {
        return Err(ApiError::not_found(format!("Post {} not found", post_id)));
    }
    let stats = repo.stats(post.id).await?;

    log::info!("Updated post {} via REST API", post.id);

    Ok(Json(PostResponse {
        post: PostDto::new(post, stats),
    }))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(post_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;

    let repo = PostRepository::new(state.pool.clone());
    let post = find_post(&repo, post_uuid).await?;

    if post.author_id != user_id {
        return Err(ApiError::forbidden("You can only delete your own posts"));
    }

    if !repo.delete(post_uuid).await? {
        return Err(ApiError::not_found(format!("Post {} not found", post_id)));
    }

    log::info!("Deleted post {} via REST API", post_id);

    Ok(Json(DeleteResponse {
        deleted_id: post_id,
    }))
}

pub async fn find_post(repo: &PostRepository, post_id: Uuid) -> ApiResult<Post> {
    repo.find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Post {} not found", post_id)))
}
