use crate::{ApiError, AppState, UserId};

use sm_core::{NewUser, User};
use sm_db::UserRepository;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;
use uuid::Uuid;

const SECRET: &[u8] = b"extractor-test-secret-that-is-long-enough";

async fn create_test_state() -> AppState {
    let pool = sm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    sm_db::migrate(&pool).await.expect("Failed to run migrations");

    AppState::unauthenticated(pool, "media")
}

async fn insert_user(state: &AppState, email: &str, active: bool) -> User {
    let mut user = NewUser::regular(email, "secret").into_user("x".to_string());
    user.is_active = active;
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to insert user");
    user
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<UserId, ApiError> {
    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let user = insert_user(&state, "alice@example.com", true).await;
    let request = Request::builder()
        .header("X-User-Id", user.id.to_string())
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap(), UserId(user.id));
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_invalid_uuid() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-User-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_unknown_user() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-User-Id", Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_inactive_user() {
    let state = create_test_state().await;
    let user = insert_user(&state, "dormant@example.com", false).await;
    let request = Request::builder()
        .header("X-User-Id", user.id.to_string())
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_accepts_bearer_token_when_auth_enabled() {
    let state = create_test_state().await.with_jwt_secret(SECRET, 3600);
    let user = insert_user(&state, "bob@example.com", true).await;
    let token = state
        .token_issuer
        .as_ref()
        .unwrap()
        .issue(&user)
        .unwrap()
        .access_token;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap(), UserId(user.id));
}

#[tokio::test]
async fn test_extractor_ignores_user_id_header_when_auth_enabled() {
    let state = create_test_state().await.with_jwt_secret(SECRET, 3600);
    let user = insert_user(&state, "carol@example.com", true).await;
    let request = Request::builder()
        .header("X-User-Id", user.id.to_string())
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    match error {
        ApiError::Unauthorized { code, .. } => assert_eq!(code, "MISSING_AUTH_HEADER"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state().await.with_jwt_secret(SECRET, 3600);
    let user = insert_user(&state, "dave@example.com", true).await;
    let forged = sm_auth::TokenIssuer::with_hs256(b"some-other-secret-also-long-enough!!", 3600)
        .issue(&user)
        .unwrap()
        .access_token;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}
