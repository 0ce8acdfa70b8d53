//! User service — record logins and look up profiles.

use bandsite_domain::error::{BandsiteError, NotFoundError};
use bandsite_domain::id::UserId;
use bandsite_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user profiles.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert or refresh a user, typically right after login.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id, role = %user.role))]
    pub async fn upsert_user(&self, user: User) -> Result<User, BandsiteError> {
        self.repo.upsert(user).await
    }

    /// Look up a user by identity.
    ///
    /// # Errors
    ///
    /// Returns [`BandsiteError::NotFound`] when the user never logged in,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: &UserId) -> Result<User, BandsiteError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }
}
