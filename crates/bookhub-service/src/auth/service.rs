//! Account lifecycle — signup, login, token refresh, and logout.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use bookhub_auth::password::PasswordHasher;
use bookhub_auth::revocation::RevocationList;
use bookhub_auth::token::{TokenClaims, TokenIssuer, TokenPair};
use bookhub_core::error::AppError;
use bookhub_entity::user::model::CreateUser;
use bookhub_entity::user::{User, UserRole};

use super::store::UserStore;

/// Handles account creation and the token lifecycle.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Identity store.
    user_repo: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Revocation list for logout.
    revocations: Arc<RevocationList>,
}

/// Data for creating a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignupData {
    /// Unique handle shown alongside reviews.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email, unique per account.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued token pair.
    pub tokens: TokenPair,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        issuer: Arc<TokenIssuer>,
        revocations: Arc<RevocationList>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            issuer,
            revocations,
        }
    }

    /// Creates a new account with the default `user` role.
    ///
    /// The plaintext password is hashed before any row is written, so a
    /// failed insert never leaves credentials half-stored.
    pub async fn signup(&self, data: SignupData) -> Result<User, AppError> {
        if self.user_repo.exists_by_email(&data.email).await? {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: data.username,
                first_name: data.first_name,
                last_name: data.last_name,
                email: data.email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Authenticates a user and issues a fresh token pair.
    ///
    /// Unknown email and wrong password produce the same error, so a
    /// caller cannot enumerate which emails have accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            return Err(AppError::invalid_credentials());
        }

        let tokens = self
            .issuer
            .generate_token_pair(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome { user, tokens })
    }

    /// Mints a new access token from verified refresh token claims.
    ///
    /// The refresh token itself is untouched; it stays valid until its
    /// natural expiry or an explicit logout.
    pub fn refresh(&self, claims: &TokenClaims) -> Result<(String, DateTime<Utc>), AppError> {
        self.issuer
            .generate_access_token(claims.sub, &claims.email, claims.role)
    }

    /// Revokes the presented token for the rest of its lifetime.
    pub async fn logout(&self, claims: &TokenClaims) -> Result<(), AppError> {
        self.revocations
            .revoke(claims.jti, claims.remaining_ttl_seconds())
            .await?;

        info!(user_id = %claims.sub, "User logged out");
        Ok(())
    }

    /// Loads the account behind a verified token.
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use bookhub_cache::CacheManager;
    use bookhub_cache::memory::MemoryCacheProvider;
    use bookhub_core::config::auth::AuthConfig;
    use bookhub_core::config::cache::MemoryCacheConfig;
    use bookhub_core::error::ErrorKind;
    use bookhub_core::result::AppResult;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryUserStore {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(email))
                .cloned())
        }

        async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
            Ok(self.find_by_email(email).await?.is_some())
        }

        async fn create(&self, data: &CreateUser) -> AppResult<User> {
            let now = Utc::now();
            let user = User {
                id: Uuid::new_v4(),
                username: data.username.clone(),
                first_name: data.first_name.clone(),
                last_name: data.last_name.clone(),
                email: data.email.clone(),
                password_hash: data.password_hash.clone(),
                role: data.role,
                is_verified: false,
                created_at: now,
                updated_at: now,
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }
    }

    fn service() -> AuthService {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        };
        let provider =
            MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 300);
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));

        AuthService::new(
            Arc::new(MemoryUserStore::default()),
            Arc::new(PasswordHasher::new()),
            Arc::new(TokenIssuer::new(&config).unwrap()),
            Arc::new(RevocationList::new(cache, &config)),
        )
    }

    fn signup_data(email: &str) -> SignupData {
        SignupData {
            username: "reader".to_string(),
            first_name: "Rea".to_string(),
            last_name: "Der".to_string(),
            email: email.to_string(),
            password: "hunter2!aa".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_signup_conflicts() {
        let svc = service();
        svc.signup(signup_data("reader@example.com")).await.unwrap();

        let err = svc
            .signup(signup_data("reader@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_plaintext() {
        let svc = service();
        let user = svc.signup(signup_data("reader@example.com")).await.unwrap();

        assert_ne!(user.password_hash, "hunter2!aa");
        assert_eq!(user.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_login_returns_tokens_for_valid_credentials() {
        let svc = service();
        let user = svc.signup(signup_data("reader@example.com")).await.unwrap();

        let outcome = svc
            .login("reader@example.com", "hunter2!aa")
            .await
            .unwrap();
        assert_eq!(outcome.user.id, user.id);
        assert!(!outcome.tokens.access_token.is_empty());
        assert!(!outcome.tokens.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_errors_do_not_reveal_account_existence() {
        let svc = service();
        svc.signup(signup_data("reader@example.com")).await.unwrap();

        let wrong_password = svc
            .login("reader@example.com", "wrong-password")
            .await
            .unwrap_err();
        let unknown_email = svc
            .login("nobody@example.com", "hunter2!aa")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::InvalidCredentials);
        assert_eq!(unknown_email.kind, ErrorKind::InvalidCredentials);
        assert_eq!(wrong_password.message, unknown_email.message);
    }
}
