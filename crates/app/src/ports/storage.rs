//! Storage port — repository traits for events and users.

use std::future::Future;

use bandsite_domain::error::BandsiteError;
use bandsite_domain::event::Event;
use bandsite_domain::id::{EventId, UserId};
use bandsite_domain::user::User;

/// Repository for persisting and querying [`Event`]s.
///
/// Implementations must never write `likes` here; the counter is owned by
/// [`LikeRepository`](super::LikeRepository).
pub trait EventRepository {
    /// Create a new event in storage. The stored counter starts at zero.
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, BandsiteError>> + Send;

    /// Get an event by its unique identifier.
    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, BandsiteError>> + Send;

    /// Get all events, soonest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Event>, BandsiteError>> + Send;

    /// Delete an event and, by cascade, every like referencing it.
    fn delete(&self, id: EventId) -> impl Future<Output = Result<(), BandsiteError>> + Send;
}

/// Repository for users known from logins.
pub trait UserRepository {
    /// Insert the user, or refresh name, email and role if it already exists.
    fn upsert(&self, user: User) -> impl Future<Output = Result<User, BandsiteError>> + Send;

    /// Get a user by identity.
    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, BandsiteError>> + Send;
}
