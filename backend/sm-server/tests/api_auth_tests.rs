//! Integration tests for login and bearer-token authentication

mod common;

use crate::common::{TEST_JWT_SECRET, create_test_app_state, send};

use sm_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn register(state: &AppState, email: &str, password: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/users",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["user"]["id"].as_str().unwrap().to_string()
}

async fn login(state: &AppState, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        state,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);
    register(&state, "alice@example.com", "s3cret").await;

    let (status, json) = login(&state, "alice@EXAMPLE.com", "s3cret").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 900);
    assert!(!json["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_with_wrong_password_returns_401() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);
    register(&state, "alice@example.com", "s3cret").await;

    let (status, json) = login(&state, "alice@example.com", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_with_unknown_email_returns_401() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);

    let (status, _) = login(&state, "ghost@example.com", "whatever").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_inactive_user_returns_401() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);
    let user_id = register(&state, "gone@example.com", "s3cret").await;
    sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?")
        .bind(&user_id)
        .execute(&state.pool)
        .await
        .unwrap();

    let (status, _) = login(&state, "gone@example.com", "s3cret").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_without_configured_secret_returns_400() {
    let (_media, state) = create_test_app_state().await;
    register(&state, "alice@example.com", "s3cret").await;

    let (status, json) = login(&state, "alice@example.com", "s3cret").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_bearer_token_authorizes_post_creation() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);
    let user_id = register(&state, "poster@example.com", "s3cret").await;
    let (_, token) = login(&state, "poster@example.com", "s3cret").await;
    let token = token["access_token"].as_str().unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/posts")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(json!({ "content": "authenticated" }).to_string()))
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["post"]["author_id"], user_id);
}

#[tokio::test]
async fn test_missing_bearer_token_returns_401_when_auth_enabled() {
    let (_media, state) = create_test_app_state().await;
    let state = state.with_jwt_secret(TEST_JWT_SECRET, 900);

    let (status, json) = send(
        &state,
        "POST",
        "/api/v1/posts",
        None,
        Some(json!({ "content": "anonymous" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}
