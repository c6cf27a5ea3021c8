//! Bearer token extractors — pull the JWT from the Authorization header,
//! run it through the token guard, and inject the verified claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use bookhub_auth::token::{TokenClaims, TokenClass};
use bookhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified access token claims, with the role gate already applied.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Claims of the presented access token.
    pub claims: TokenClaims,
}

/// Verified refresh token claims.
#[derive(Debug, Clone)]
pub struct RefreshUser {
    /// Claims of the presented refresh token.
    pub claims: TokenClaims,
}

/// Pulls the bearer token out of the Authorization header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::invalid_token("Missing Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Invalid Authorization header format"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.token_guard.verify(token, TokenClass::Access).await?;
        state.role_gate.authorize(claims.role)?;

        Ok(AuthUser { claims })
    }
}

impl FromRequestParts<AppState> for RefreshUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.token_guard.verify(token, TokenClass::Refresh).await?;

        Ok(RefreshUser { claims })
    }
}
