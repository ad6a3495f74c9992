//! Follow graph REST API handlers

use crate::{
    ApiResult, AppState, FollowListResponse, FollowRequest, FollowResponse, PageQuery,
    UnfollowResponse, UserId,
};

use sm_core::parse_uuid;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/follows
///
/// 201 when a new edge is created, 200 when the caller already followed
/// the target.
pub async fn follow_user(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Json(req): Json<FollowRequest>,
) -> ApiResult<(StatusCode, Json<FollowResponse>)> {
    let target = parse_uuid(req.target_id.trim(), "target_id")?;

    let outcome = state.graph.follow(caller, target).await?;
    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(FollowResponse {
            follower_id: caller.to_string(),
            followee_id: target.to_string(),
            created: outcome.is_created(),
        }),
    ))
}

/// POST /api/v1/unfollows
pub async fn unfollow_user(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Json(req): Json<FollowRequest>,
) -> ApiResult<Json<UnfollowResponse>> {
    let target = parse_uuid(req.target_id.trim(), "target_id")?;

    let outcome = state.graph.unfollow(caller, target).await?;

    Ok(Json(UnfollowResponse {
        follower_id: caller.to_string(),
        followee_id: target.to_string(),
        removed: outcome.is_removed(),
    }))
}

/// GET /api/v1/follows - who the caller follows
pub async fn list_my_following(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<FollowListResponse>> {
    let page = query.page()?;
    let ids = state.graph.following_page(caller, page).await?;

    Ok(Json(FollowListResponse::new(caller, ids, page)))
}

/// GET /api/v1/users/{id}/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<FollowListResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    let page = query.page()?;
    let ids = state.graph.following_page(user_uuid, page).await?;

    Ok(Json(FollowListResponse::new(user_uuid, ids, page)))
}

/// GET /api/v1/users/{id}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<FollowListResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    let page = query.page()?;
    let ids = state.graph.followers_page(user_uuid, page).await?;

    Ok(Json(FollowListResponse::new(user_uuid, ids, page)))
}
