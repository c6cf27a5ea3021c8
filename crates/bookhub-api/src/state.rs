//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use bookhub_auth::guard::TokenGuard;
use bookhub_auth::password::PasswordHasher;
use bookhub_auth::rbac::RoleGate;
use bookhub_auth::token::TokenIssuer;
use bookhub_cache::provider::CacheManager;
use bookhub_core::config::AppConfig;

use bookhub_database::repositories::book::BookRepository;
use bookhub_database::repositories::review::ReviewRepository;
use bookhub_database::repositories::user::UserRepository;

use bookhub_service::auth::AuthService;
use bookhub_service::book::BookService;
use bookhub_service::review::ReviewService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Bearer token admission (signature + revocation + class)
    pub token_guard: Arc<TokenGuard>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Role gate applied to authenticated endpoints
    pub role_gate: Arc<RoleGate>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Book repository
    pub book_repo: Arc<BookRepository>,
    /// Review repository
    pub review_repo: Arc<ReviewRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account and token lifecycle service
    pub auth_service: Arc<AuthService>,
    /// Book catalogue service
    pub book_service: Arc<BookService>,
    /// Review service
    pub review_service: Arc<ReviewService>,
}
