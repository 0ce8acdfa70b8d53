//! Event — a show or appearance listed on the site.
//!
//! `likes` is a cache of the number of [`EventLike`](crate::like::EventLike)
//! rows referencing the event. Only the like toggle path may change it.

use serde::{Deserialize, Serialize};

use crate::error::{BandsiteError, ValidationError};
use crate::id::EventId;
use crate::time::{Timestamp, now};

/// A listed show with its denormalised like counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub venue: Option<String>,
    pub starts_at: Timestamp,
    pub likes: u32,
}

impl Event {
    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BandsiteError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), BandsiteError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Event`].
///
/// New events always start with zero likes.
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    venue: Option<String>,
    starts_at: Option<Timestamp>,
}

impl EventBuilder {
    #[must_use]
    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    #[must_use]
    pub fn starts_at(mut self, starts_at: Timestamp) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Consume the builder, validate, and return an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns [`BandsiteError::Validation`] if `title` is missing or blank.
    pub fn build(self) -> Result<Event, BandsiteError> {
        let event = Event {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            venue: self.venue,
            starts_at: self.starts_at.unwrap_or_else(now),
            likes: 0,
        };
        event.validate()?;
        Ok(event)
    }
}
