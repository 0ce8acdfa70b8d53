//! `SQLite` implementation of [`EventRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bandsite_app::ports::EventRepository;
use bandsite_domain::error::BandsiteError;
use bandsite_domain::event::Event;
use bandsite_domain::id::EventId;

use crate::error::{StorageError, decode_error};

/// Wrapper for converting database rows into domain [`Event`].
struct Wrapper(Event);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Event> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let venue: Option<String> = row.try_get("venue")?;
        let starts_at: String = row.try_get("starts_at")?;
        let likes: i64 = row.try_get("likes")?;

        let id = EventId::from_str(&id).map_err(decode_error)?;
        let starts_at = chrono::DateTime::parse_from_rfc3339(&starts_at)
            .map_err(decode_error)?
            .to_utc();
        let likes = u32::try_from(likes).map_err(decode_error)?;

        Ok(Self(Event {
            id,
            title,
            venue,
            starts_at,
            likes,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO events (id, title, venue, starts_at, likes) VALUES (?, ?, ?, ?, 0)";
const SELECT_BY_ID: &str = "SELECT * FROM events WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM events ORDER BY starts_at";
const DELETE_BY_ID: &str = "DELETE FROM events WHERE id = ?";

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventRepository for SqliteEventRepository {
    fn create(&self, mut event: Event) -> impl Future<Output = Result<Event, BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(event.id.to_string())
                .bind(&event.title)
                .bind(event.venue.as_deref())
                .bind(event.starts_at.to_rfc3339_opts(SecondsFormat::Micros, true))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            event.likes = 0;
            Ok(event)
        }
    }

    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Event>, BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: EventId) -> impl Future<Output = Result<(), BandsiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use chrono::{Duration, Utc};

    async fn setup() -> SqliteEventRepository {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        SqliteEventRepository::new(db.pool().clone())
    }

    fn test_event() -> Event {
        Event::builder()
            .title("Summer tour opener")
            .venue("Brixton Academy")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_event_when_valid() {
        let repo = setup().await;
        let event = test_event();
        let id = event.id;

        repo.create(event).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title, "Summer tour opener");
        assert_eq!(fetched.venue.as_deref(), Some("Brixton Academy"));
        assert_eq!(fetched.likes, 0);
    }

    #[tokio::test]
    async fn should_ignore_incoming_counter_when_creating() {
        let repo = setup().await;
        let mut event = test_event();
        event.likes = 99;
        let id = event.id;

        let created = repo.create(event).await.unwrap();
        assert_eq!(created.likes, 0);
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().likes, 0);
    }

    #[tokio::test]
    async fn should_return_none_when_event_not_found() {
        let repo = setup().await;
        assert!(repo.get_by_id(EventId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_events_soonest_first() {
        let repo = setup().await;
        let now = Utc::now();
        let later = Event::builder()
            .title("Later")
            .starts_at(now + Duration::days(30))
            .build()
            .unwrap();
        let sooner = Event::builder()
            .title("Sooner")
            .starts_at(now + Duration::days(1))
            .build()
            .unwrap();
        repo.create(later).await.unwrap();
        repo.create(sooner).await.unwrap();

        let titles: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);
    }

    #[tokio::test]
    async fn should_delete_event_when_exists() {
        let repo = setup().await;
        let event = test_event();
        let id = event.id;
        repo.create(event).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }
}
