//! Event service — use-cases for managing listed events.

use bandsite_domain::error::{BandsiteError, NotFoundError};
use bandsite_domain::event::Event;
use bandsite_domain::id::EventId;

use crate::ports::EventRepository;

/// Application service for event CRUD operations.
pub struct EventService<R> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new event after validating domain invariants.
    ///
    /// Whatever counter the caller passes in is discarded; new events start
    /// with zero likes.
    ///
    /// # Errors
    ///
    /// Returns [`BandsiteError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, event), fields(event_title = %event.title))]
    pub async fn create_event(&self, mut event: Event) -> Result<Event, BandsiteError> {
        event.validate()?;
        event.likes = 0;
        self.repo.create(event).await
    }

    /// Look up an event by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BandsiteError::NotFound`] when no event with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_event(&self, id: EventId) -> Result<Event, BandsiteError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Event",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all events.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_events(&self) -> Result<Vec<Event>, BandsiteError> {
        self.repo.get_all().await
    }

    /// Delete an event by id. Its likes go with it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_event(&self, id: EventId) -> Result<(), BandsiteError> {
        self.repo.delete(id).await
    }
}
