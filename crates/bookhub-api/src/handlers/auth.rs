//! Auth handlers — signup, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use bookhub_service::auth::SignupData;

use crate::dto;
use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, ProfileResponse, TokenResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, RefreshUser};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    dto::validate(&req)?;

    let user = state
        .auth_service
        .signup(SignupData {
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    dto::validate(&req)?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.tokens.access_token,
        refresh_token: outcome.tokens.refresh_token,
        access_expires_at: outcome.tokens.access_expires_at,
        refresh_expires_at: outcome.tokens.refresh_expires_at,
        user: UserResponse::from(outcome.user),
    })))
}

/// GET /api/auth/refresh_token (bearer = refresh token)
pub async fn refresh_token(
    State(state): State<AppState>,
    refresh: RefreshUser,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let (access_token, expires_at) = state.auth_service.refresh(&refresh.claims)?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token,
        expires_at,
    })))
}

/// POST /api/auth/logout (bearer = access token)
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.auth_service.logout(&auth.claims).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let user = state.auth_service.current_user(auth.claims.sub).await?;
    let books = state.book_service.list_user_books(user.id).await?;

    Ok(Json(ApiResponse::ok(ProfileResponse {
        user: UserResponse::from(user),
        books,
    })))
}
