//! JWT-based principal extractors for Axum handlers.

use std::convert::Infallible;

use archiveand_core::error::CoreError;
use archiveand_core::ownership::Principal;
use archiveand_core::types::UserId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Pull the raw token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Result<&str, CoreError> {
    let header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
    })
}

/// Authenticated user extracted from a JWT Bearer token.
///
/// Use this in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The user's id at the auth provider (from `claims.sub`).
    pub user_id: UserId,
}

impl AuthUser {
    pub fn principal(&self) -> Principal {
        Principal::User(self.user_id)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// The caller's principal on routes that are readable without logging in.
///
/// Never rejects: a missing, malformed or invalid token resolves to
/// [`Principal::Anonymous`].
#[derive(Debug, Clone, Copy)]
pub struct MaybePrincipal(pub Principal);

impl FromRequestParts<AppState> for MaybePrincipal {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = bearer_token(parts)
            .ok()
            .and_then(|token| validate_token(token, &state.config.jwt).ok())
            .map(|claims| claims.sub);

        Ok(MaybePrincipal(Principal::from(user_id)))
    }
}
