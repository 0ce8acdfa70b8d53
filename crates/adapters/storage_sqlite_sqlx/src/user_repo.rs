//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bandsite_app::ports::UserRepository;
use bandsite_domain::error::BandsiteError;
use bandsite_domain::id::UserId;
use bandsite_domain::user::{Role, User};

use crate::error::{StorageError, decode_error};

struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let email: Option<String> = row.try_get("email")?;
        let role: String = row.try_get("role")?;

        let id = UserId::new(id).map_err(decode_error)?;
        let role: Role = role.parse().map_err(decode_error)?;

        Ok(Self(User {
            id,
            name,
            email,
            role,
        }))
    }
}

const UPSERT: &str = r"
    INSERT INTO users (id, name, email, role) VALUES (?, ?, ?, ?)
    ON CONFLICT (id) DO UPDATE SET
        name = excluded.name,
        email = excluded.email,
        role = excluded.role
";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn upsert(&self, user: User) -> impl Future<Output = Result<User, BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(user.id.as_str())
                .bind(user.name.as_deref())
                .bind(user.email.as_deref())
                .bind(user.role.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, BandsiteError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    fn subject() -> UserId {
        UserId::new("auth0|drummer").unwrap()
    }

    #[tokio::test]
    async fn should_insert_user_when_unknown() {
        let repo = setup().await;
        let mut user = User::new(subject(), Role::Member);
        user.email = Some("drummer@example.com".to_string());

        repo.upsert(user.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(&subject()).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn should_update_profile_when_user_exists() {
        let repo = setup().await;
        repo.upsert(User::new(subject(), Role::Member)).await.unwrap();

        let mut promoted = User::new(subject(), Role::Admin);
        promoted.name = Some("Drummer".to_string());
        repo.upsert(promoted).await.unwrap();

        let fetched = repo.get_by_id(&subject()).await.unwrap().unwrap();
        assert_eq!(fetched.role, Role::Admin);
        assert_eq!(fetched.name.as_deref(), Some("Drummer"));
    }

    #[tokio::test]
    async fn should_return_none_when_user_unknown() {
        let repo = setup().await;
        assert!(repo.get_by_id(&subject()).await.unwrap().is_none());
    }
}
