//! Axum extractor for the calling user

use crate::{ApiError, AppState};

use sm_db::UserRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated, active caller.
///
/// With auth enabled the id comes from the `sub` claim of a Bearer token.
/// With auth disabled it is read from the `X-User-Id` header. Either way the
/// account must exist and be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let user_id = match state.jwt_validator {
                Some(ref validator) => {
                    let header = parts
                        .headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok());
                    validator.validate_header(header)?.user_id()?
                }
                None => header_user_id(parts)?,
            };

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?;

            match user {
                Some(user) if user.is_active => Ok(UserId(user.id)),
                Some(_) => {
                    log::warn!("Rejected request from inactive user {}", user_id);
                    Err(ApiError::unauthorized("User account is inactive"))
                }
                None => Err(ApiError::unauthorized(format!(
                    "Unknown user {}",
                    user_id
                ))),
            }
        }
    }
}

pub(crate) fn header_user_id(parts: &Parts) -> Result<Uuid, ApiError> {
    let value = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("X-User-Id header is not valid text"))?;

    Uuid::parse_str(value.trim()).map_err(|_| {
        log::warn!("Invalid UUID in X-User-Id header: {}", value);
        ApiError::unauthorized("X-User-Id header is not a UUID")
    })
}
