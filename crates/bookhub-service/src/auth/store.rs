//! Identity store abstraction for the auth flows.

use async_trait::async_trait;
use uuid::Uuid;

use bookhub_core::result::AppResult;
use bookhub_database::repositories::user::UserRepository;
use bookhub_entity::user::User;
use bookhub_entity::user::model::CreateUser;

/// Persistence operations the account lifecycle needs.
///
/// [`UserRepository`] is the production implementation; tests substitute
/// an in-memory store, the same seam the cache provider trait gives the
/// revocation list.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Check whether a user with the given email exists.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Persist a new user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        UserRepository::exists_by_email(self, email).await
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        UserRepository::create(self, data).await
    }
}
