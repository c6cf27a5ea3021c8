//! Route definitions for the BookHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use http::HeaderValue;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::method::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use bookhub_core::config::app::ServerConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(book_routes())
        .merge(review_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: signup, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh_token", get(handlers::auth::refresh_token))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Book catalogue CRUD
fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::book::list_books))
        .route("/books", post(handlers::book::create_book))
        .route("/books/user/{user_id}", get(handlers::book::list_user_books))
        .route("/books/{id}", get(handlers::book::get_book))
        .route("/books/{id}", patch(handlers::book::update_book))
        .route("/books/{id}", delete(handlers::book::delete_book))
}

/// Review endpoints
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews/{id}",
            get(handlers::review::list_book_reviews).delete(handlers::review::delete_review),
        )
        .route(
            "/reviews/books/{book_id}",
            post(handlers::review::create_review),
        )
}

/// Health endpoints (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds the CORS layer from server configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
