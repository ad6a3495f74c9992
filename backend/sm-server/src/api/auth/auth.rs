//! Login handler

use crate::{ApiError, ApiResult, AppState, LoginRequest};

use sm_auth::{AuthError, IssuedToken, verify_password};
use sm_core::normalize_email;
use sm_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/v1/auth/login
///
/// Unknown email, wrong password and inactive accounts all produce the
/// same 401 so the response does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<IssuedToken>> {
    let issuer = state.token_issuer.as_ref().ok_or_else(|| ApiError::BadRequest {
        message: "Token login is not configured on this server".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let email = normalize_email(&req.email);
    let user = UserRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await?;

    let user = match user {
        Some(user) if user.is_active && verify_password(&req.password, &user.password_hash)? => {
            user
        }
        _ => {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
    };

    let token = issuer.issue(&user)?;
    log::info!("User {} logged in", user.id);

    Ok(Json(token))
}
