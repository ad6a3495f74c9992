//! User REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, DeleteResponse, PageQuery,
    ProfileImageQuery, UpdateUserRequest, UserDto, UserId, UserListResponse, UserResponse,
};

use sm_auth::hash_password;
use sm_core::{NewUser, User, profile_image_path, validate_username};
use sm_db::UserRepository;

use std::panic::Location;
use std::path::Path as FsPath;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let mut new_user = NewUser::regular(req.email, req.password);
    new_user.username = req.username;
    new_user.first_name = req.first_name;
    new_user.last_name = req.last_name;
    new_user.bio = req.bio;
    new_user.validate()?;

    let password_hash = hash_password(&new_user.password)?;
    let user = new_user.into_user(password_hash);

    UserRepository::new(state.pool.clone()).create(&user).await?;

    log::info!("Registered user {} via REST API", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let page = query.page()?;
    let users = UserRepository::new(state.pool.clone()).list(page).await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    let user = find_user(&state, user_uuid).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    require_self(caller, user_uuid)?;

    let mut user = find_user(&state, user_uuid).await?;

    if let Some(username) = req.username {
        validate_username(&username)?;
        user.username = Some(username.trim().to_string());
    }
    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(bio) = req.bio {
        user.bio = if bio.trim().is_empty() { None } else { Some(bio) };
    }
    if let Some(online) = req.online {
        user.online = online;
    }
    user.updated_at = Utc::now();

    let repo = UserRepository::new(state.pool.clone());
    if !repo.update(&user).await? {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    log::info!("Updated profile of user {} via REST API", user.id);

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/users/{id}
///
/// Removes the account together with its posts, comments, likes and every
/// follow edge touching it.
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    require_self(caller, user_uuid)?;

    let user = find_user(&state, user_uuid).await?;

    let repo = UserRepository::new(state.pool.clone());
    if !repo.delete(user_uuid).await? {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    if let Some(ref image) = user.profile_image {
        let path = state.media.root.join(image);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            log::warn!(
                "Failed to remove profile image {} of deleted user {}: {}",
                path.display(),
                user_uuid,
                e
            );
        }
    }

    log::info!("Deleted user {} via REST API", user_uuid);

    Ok(Json(DeleteResponse {
        deleted_id: user_id,
    }))
}

/// PUT /api/v1/users/{id}/profile-image?filename=
///
/// The request body is the raw image. It is stored under the media root at
/// a generated name that keeps only the extension of `filename`.
pub async fn upload_profile_image(
    State(state): State<AppState>,
    UserId(caller): UserId,
    Path(user_id): Path<String>,
    Query(query): Query<ProfileImageQuery>,
    body: Bytes,
) -> ApiResult<Json<UserResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    require_self(caller, user_uuid)?;

    if query.filename.trim().is_empty() {
        return Err(ApiError::validation("File name cannot be empty", "filename"));
    }
    if body.is_empty() {
        return Err(ApiError::validation("Image body cannot be empty", "body"));
    }
    if body.len() > state.media.max_upload_bytes {
        return Err(ApiError::validation(
            format!(
                "Image must be at most {} bytes",
                state.media.max_upload_bytes
            ),
            "body",
        ));
    }

    let mut user = find_user(&state, user_uuid).await?;

    let relative = profile_image_path(
        &state.media.upload,
        user.username.as_deref(),
        query.filename.trim(),
    );
    let absolute = state.media.root.join(&relative);
    write_file(&absolute, &body).await?;

    let previous = user
        .profile_image
        .replace(relative.to_string_lossy().replace('\\', "/"));
    user.updated_at = Utc::now();

    let repo = UserRepository::new(state.pool.clone());
    if !repo.update(&user).await? {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    if let Some(previous) = previous {
        let path = state.media.root.join(previous);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            log::warn!("Failed to remove old profile image {}: {}", path.display(), e);
        }
    }

    log::info!(
        "Stored profile image for user {} at {} ({} bytes)",
        user.id,
        relative.display(),
        body.len()
    );

    Ok(Json(UserResponse { user: user.into() }))
}

pub(crate) async fn find_user(state: &AppState, user_id: Uuid) -> ApiResult<User> {
    UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))
}

#[track_caller]
fn require_self(caller: Uuid, user_id: Uuid) -> ApiResult<()> {
    if caller != user_id {
        return Err(ApiError::forbidden(format!(
            "User {} cannot modify user {}",
            caller, user_id
        )));
    }
    Ok(())
}

async fn write_file(path: &FsPath, contents: &[u8]) -> ApiResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| storage_error(path, e))?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| storage_error(path, e))
}

#[track_caller]
fn storage_error(path: &FsPath, e: std::io::Error) -> ApiError {
    log::error!("Failed to write {}: {}", path.display(), e);
    ApiError::Internal {
        message: "Failed to store uploaded file".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
