#![allow(dead_code)]

//! Test infrastructure for sm-server API tests

use sm_core::NewUser;
use sm_db::UserRepository;
use sm_server::{AppState, USER_ID_HEADER, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-of-sufficient-length";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = sm_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    sm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with auth disabled and media written under a temp dir.
/// Keep the TempDir alive for the duration of the test.
pub async fn create_test_app_state() -> (TempDir, AppState) {
    let media = TempDir::new().expect("Failed to create media dir");
    let pool = create_test_pool().await;
    let state = AppState::unauthenticated(pool, media.path());
    (media, state)
}

/// Insert an active account directly, bypassing registration
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> Uuid {
    let user = NewUser::regular(email, "unused").into_user("x".to_string());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user.id
}

/// Send a request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Ids of a follow list response, as strings
pub fn ids(json: &Value) -> Vec<String> {
    json["user_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_str().unwrap().to_string())
        .collect()
}
