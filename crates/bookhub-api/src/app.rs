//! Application builder — wires repositories, services, and auth into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;

use bookhub_auth::guard::TokenGuard;
use bookhub_auth::password::PasswordHasher;
use bookhub_auth::rbac::RoleGate;
use bookhub_auth::revocation::RevocationList;
use bookhub_auth::token::{TokenIssuer, TokenVerifier};
use bookhub_cache::provider::CacheManager;
use bookhub_core::config::AppConfig;
use bookhub_core::error::AppError;

use bookhub_database::repositories::book::BookRepository;
use bookhub_database::repositories::review::ReviewRepository;
use bookhub_database::repositories::user::UserRepository;

use bookhub_service::auth::AuthService;
use bookhub_service::book::BookService;
use bookhub_service::review::ReviewService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let book_repo = Arc::new(BookRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));

    // Auth
    let password_hasher = Arc::new(PasswordHasher::new());
    let token_issuer = Arc::new(TokenIssuer::new(&config.auth)?);
    let token_verifier = TokenVerifier::new(&config.auth)?;
    let revocations = Arc::new(RevocationList::new(Arc::clone(&cache), &config.auth));
    let token_guard = Arc::new(TokenGuard::new(
        token_verifier,
        revocations.as_ref().clone(),
    ));
    let role_gate = Arc::new(RoleGate::any_role());

    // Services
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo) as Arc<dyn bookhub_service::auth::store::UserStore>,
        Arc::clone(&password_hasher),
        Arc::clone(&token_issuer),
        Arc::clone(&revocations),
    ));
    let book_service = Arc::new(BookService::new(Arc::clone(&book_repo)));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&book_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        token_issuer,
        token_guard,
        password_hasher,
        role_gate,
        user_repo,
        book_repo,
        review_repo,
        auth_service,
        book_service,
        review_service,
    })
}

/// Runs the BookHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("BookHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
