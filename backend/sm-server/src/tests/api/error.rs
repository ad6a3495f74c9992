use crate::ApiError;

use sm_auth::AuthError;
use sm_core::{CoreError, GraphError};
use sm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::not_found("Post not found");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Post not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Content cannot be empty", "content");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "content");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("not yours")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_self_follow_graph_error_returns_400_self_follow() {
    let user_id = Uuid::new_v4();
    let error: ApiError = GraphError::SelfFollow {
        user_id,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "SELF_FOLLOW");
    assert_eq!(json["error"]["field"], "target_id");
}

#[tokio::test]
async fn test_graph_not_found_returns_404() {
    let user_id = Uuid::new_v4();
    let error: ApiError = GraphError::NotFound {
        user_id,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&user_id.to_string())
    );
}

#[test]
fn test_graph_conflict_maps_to_409_and_storage_to_500() {
    let conflict: ApiError = GraphError::Conflict {
        message: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let storage: ApiError = GraphError::Storage {
        message: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(conflict.status(), StatusCode::CONFLICT);
    assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_duplicate_db_error_returns_409_with_field() {
    let error: ApiError = DbError::Duplicate {
        field: "email".into(),
        message: "A user with that email already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "email");
}

#[test]
fn test_row_not_found_db_error_maps_to_404() {
    let error: ApiError = DbError::from(sqlx::Error::RowNotFound).into();

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_credentials_return_401_unauthorized() {
    let error: ApiError = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_expired_token_keeps_auth_error_code() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[test]
fn test_password_hash_failure_is_internal() {
    let error: ApiError = AuthError::PasswordHash {
        message: "bad params".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_validation_keeps_field() {
    let error: ApiError = CoreError::Validation {
        message: "limit must be 1-200, got 0".into(),
        field: Some("limit".into()),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("limit")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let error: ApiError = uuid_err.into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(error, ApiError::Validation { .. }));
}
