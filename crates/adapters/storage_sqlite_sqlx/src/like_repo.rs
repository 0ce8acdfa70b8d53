//! `SQLite` implementation of [`LikeRepository`].
//!
//! The toggle opens its transaction with a `DELETE` on the
//! `(event_id, user_id)` pair. That statement is both the existence check
//! and the first write, so it takes the database write lock before any
//! decision is made: a concurrent toggle for the same pair waits (up to the
//! pool's busy timeout) and then sees the committed result. Counter updates
//! are relative expressions evaluated by `SQLite`, never values computed here.

use std::future::Future;
use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::SqlitePool;

use bandsite_app::ports::LikeRepository;
use bandsite_domain::error::BandsiteError;
use bandsite_domain::id::{EventId, UserId};
use bandsite_domain::like::{EventLike, LikeState, ToggleOutcome};

use crate::error::{StorageError, decode_error};

const EXISTS: &str =
    "SELECT EXISTS (SELECT 1 FROM event_likes WHERE event_id = ? AND user_id = ?)";
const DELETE_LIKE: &str = "DELETE FROM event_likes WHERE event_id = ? AND user_id = ?";
const INSERT_LIKE: &str =
    "INSERT INTO event_likes (id, event_id, user_id, created_at) VALUES (?, ?, ?, ?)";
const INCREMENT: &str = "UPDATE events SET likes = likes + 1 WHERE id = ?";
const DECREMENT: &str = "UPDATE events SET likes = MAX(likes - 1, 0) WHERE id = ?";
const SELECT_LIKED_BY_USER: &str =
    "SELECT event_id FROM event_likes WHERE user_id = ? ORDER BY created_at, event_id";
const RECONCILE: &str = r"
    UPDATE events
    SET likes = (SELECT COUNT(*) FROM event_likes WHERE event_likes.event_id = events.id)
    WHERE likes <> (SELECT COUNT(*) FROM event_likes WHERE event_likes.event_id = events.id)
";

/// `SQLite`-backed like repository.
#[derive(Clone)]
pub struct SqliteLikeRepository {
    pool: SqlitePool,
}

impl SqliteLikeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Run one toggle inside `pool`'s transaction.
///
/// Every early return that does not commit drops or rolls back the
/// transaction, so a failure or a cancelled future leaves no partial write.
async fn toggle_in_transaction(
    pool: &SqlitePool,
    event_id: EventId,
    user_id: UserId,
) -> Result<ToggleOutcome, StorageError> {
    let event_key = event_id.to_string();
    let mut tx = pool.begin().await?;

    let removed = sqlx::query(DELETE_LIKE)
        .bind(&event_key)
        .bind(user_id.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed > 0 {
        sqlx::query(DECREMENT)
            .bind(&event_key)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        return Ok(ToggleOutcome::applied(LikeState::NotLiked));
    }

    let bumped = sqlx::query(INCREMENT)
        .bind(&event_key)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if bumped == 0 {
        tx.rollback().await?;
        return Ok(ToggleOutcome::missing_event());
    }

    let like = EventLike::new(event_id, user_id);
    let inserted = sqlx::query(INSERT_LIKE)
        .bind(like.id.to_string())
        .bind(&event_key)
        .bind(like.user_id.as_str())
        .bind(like.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&mut *tx)
        .await;

    match inserted {
        Ok(_) => {
            tx.commit().await?;
            Ok(ToggleOutcome::applied(LikeState::Liked))
        }
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            // Another writer created the row first; undo our increment and
            // report the pair as liked.
            tracing::debug!(%event_id, "like already present, treating as liked");
            tx.rollback().await?;
            Ok(ToggleOutcome::applied(LikeState::Liked))
        }
        Err(err) => Err(err.into()),
    }
}

impl LikeRepository for SqliteLikeRepository {
    fn has_liked(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, BandsiteError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS)
                .bind(event_id.to_string())
                .bind(user_id)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }

    fn toggle(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<ToggleOutcome, BandsiteError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.clone();
        async move { Ok(toggle_in_transaction(&pool, event_id, user_id).await?) }
    }

    fn liked_event_ids(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<EventId>, BandsiteError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        async move {
            let rows: Vec<String> = sqlx::query_scalar(SELECT_LIKED_BY_USER)
                .bind(user_id)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let ids = rows
                .iter()
                .map(|raw| EventId::from_str(raw).map_err(decode_error))
                .collect::<Result<Vec<_>, _>>()
                .map_err(StorageError::from)?;

            Ok(ids)
        }
    }

    fn reconcile_counts(&self) -> impl Future<Output = Result<u64, BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(RECONCILE)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}
