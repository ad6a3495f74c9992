//! Comment REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CommentDto, CommentListResponse, CommentResponse,
    CreateCommentRequest, DeleteResponse, ListCommentsQuery, UpdateCommentRequest, UserId,
    find_post, validate_content,
};

use sm_core::{Comment, PageRequest, parse_uuid};
use sm_db::{CommentRepository, PostRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// GET /api/v1/comments?post_id=
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> ApiResult<Json<CommentListResponse>> {
    let post_uuid = parse_uuid(&query.post_id, "post_id")?;
    let page = PageRequest::new(query.limit, query.offset)?;

    find_post(&PostRepository::new(state.pool.clone()), post_uuid).await?;

    let repo = CommentRepository::new(state.pool.clone());
    let comments = repo.find_by_post(post_uuid, page).await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// GET /api/v1/comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_uuid = Uuid::parse_str(&comment_id)?;

    let repo = CommentRepository::new(state.pool.clone());
    let comment = find_comment(&repo, comment_uuid).await?;

    Ok(Json(CommentResponse {
        comment: comment.into(),
    }))
}

/// POST /api/v1/comments
pub async fn create_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let post_uuid = parse_uuid(&req.post_id, "post_id")?;
    let content = validate_content(&req.content)?;

    find_post(&PostRepository::new(state.pool.clone()), post_uuid).await?;

    let comment = Comment::new(post_uuid, user_id, content);
    let repo = CommentRepository::new(state.pool.clone());
    repo.create(&comment).await?;

    log::info!(
        "Created comment {} on post {} via REST API",
        comment.id,
        post_uuid
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            comment: comment.into(),
        }),
    ))
}

/// PUT /api/v1/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(comment_id): Path<String>,
    Json(req): Json<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_uuid = Uuid::parse_str(&comment_id)?;
    let content = validate_content(&req.content)?;

    let repo = CommentRepository::new(state.pool.clone());
    let mut comment = find_comment(&repo, comment_uuid).await?;

    if comment.author_id != user_id {
        return Err(ApiError::forbidden("You can only edit your own comments"));
    }

    comment.content = content;
    comment.updated_at = Utc::now();

    if !repo.update(&comment).await? {
        return Err(ApiError::not_found(format!("Comment {} not found", comment_id)));
    }

    log::info!("Updated comment {} via REST API", comment.id);

    Ok(Json(CommentResponse {
        comment: comment.into(),
    }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment_uuid = Uuid::parse_str(&comment_id)?;

    let repo = CommentRepository::new(state.pool.clone());
    let comment = find_comment(&repo, comment_uuid).await?;

    if comment.author_id != user_id {
        return Err(ApiError::forbidden("You can only delete your own comments"));
    }

    if !repo.delete(comment_uuid).await? {
        return Err(ApiError::not_found(format!("Comment {} not found", comment_id)));
    }

    log::info!("Deleted comment {} via REST API", comment_id);

    Ok(Json(DeleteResponse {
        deleted_id: comment_id,
    }))
}

async fn find_comment(repo: &CommentRepository, comment_id: Uuid) -> ApiResult<Comment> {
    repo.find_by_id(comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Comment {} not found", comment_id)))
}
