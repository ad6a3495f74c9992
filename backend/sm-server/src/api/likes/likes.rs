//! Like REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateLikeRequest, DeleteResponse, LikeDto, LikeListResponse,
    LikeResponse, ListLikesQuery, UserId, find_post,
};

use sm_core::{Like, PageRequest, parse_uuid};
use sm_db::{LikeRepository, PostRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/likes?post_id=
pub async fn list_likes(
    State(state): State<AppState>,
    Query(query): Query<ListLikesQuery>,
) -> ApiResult<Json<LikeListResponse>> {
    let post_uuid = parse_uuid(&query.post_id, "post_id")?;
    let page = PageRequest::new(query.limit, query.offset)?;

    find_post(&PostRepository::new(state.pool.clone()), post_uuid).await?;

    let likes = LikeRepository::new(state.pool.clone())
        .find_by_post(post_uuid, page)
        .await?;

    Ok(Json(LikeListResponse {
        likes: likes.into_iter().map(LikeDto::from).collect(),
    }))
}

/// POST /api/v1/likes
///
/// Liking a post twice returns the existing like with `created: false`.
pub async fn create_like(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreateLikeRequest>,
) -> ApiResult<(StatusCode, Json<LikeResponse>)> {
    let post_uuid = parse_uuid(&req.post_id, "post_id")?;

    find_post(&PostRepository::new(state.pool.clone()), post_uuid).await?;

    let repo = LikeRepository::new(state.pool.clone());
    let (like, created) = repo.create(&Like::new(post_uuid, user_id)).await?;

    let status = if created {
        log::info!("User {} liked post {} via REST API", user_id, post_uuid);
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(LikeResponse {
            like: like.into(),
            created,
        }),
    ))
}

/// DELETE /api/v1/likes/{id}
pub async fn delete_like(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(like_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let like_uuid = Uuid::parse_str(&like_id)?;

    let repo = LikeRepository::new(state.pool.clone());
    let like = repo
        .find_by_id(like_uuid)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Like {} not found", like_id)))?;

    if like.user_id != user_id {
        return Err(ApiError::forbidden("You can only remove your own likes"));
    }

    if !repo.delete(like_uuid).await? {
        return Err(ApiError::not_found(format!("Like {} not found", like_id)));
    }

    log::info!("Removed like {} via REST API", like_id);

    Ok(Json(DeleteResponse {
        deleted_id: like_id,
    }))
}
