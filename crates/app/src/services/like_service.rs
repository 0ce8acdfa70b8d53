//! Like service — toggle a user's like on an event and query like state.

use bandsite_domain::error::BandsiteError;
use bandsite_domain::id::{EventId, UserId};
use bandsite_domain::like::{LikeToggle, ToggleOutcome};

use crate::ports::LikeRepository;

/// Application service for the like toggle.
///
/// Holds no state of its own: ordering of concurrent toggles for the same
/// pair is left to the repository's transaction, so any number of service
/// instances may run against the same store.
pub struct LikeService<R> {
    repo: R,
}

impl<R: LikeRepository> LikeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Whether `user_id` currently likes `event_id`.
    ///
    /// This is the source of truth a client should initialise its like
    /// state from. An unknown event yields `false`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn has_liked(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<bool, BandsiteError> {
        self.repo.has_liked(event_id, user_id).await
    }

    /// Flip `user_id`'s like on `event_id` and return the new state.
    ///
    /// An unknown event is not an error: nothing is written and the result
    /// is `{ liked: false }`. Use [`Self::toggle_like_outcome`] to tell that
    /// case apart.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository. No retry is
    /// attempted and no partial state is left behind.
    pub async fn toggle_like(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<LikeToggle, BandsiteError> {
        let outcome = self.toggle_like_outcome(event_id, user_id).await?;
        Ok(outcome.state.into())
    }

    /// Same as [`Self::toggle_like`] but exposes whether the event existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_like_outcome(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<ToggleOutcome, BandsiteError> {
        let outcome = self.repo.toggle(event_id, user_id).await?;
        if outcome.event_found {
            tracing::debug!(liked = outcome.state.is_liked(), "like toggled");
        } else {
            tracing::debug!("toggle targeted an unknown event, nothing written");
        }
        Ok(outcome)
    }

    /// Ids of every event `user_id` likes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn liked_events(&self, user_id: &UserId) -> Result<Vec<EventId>, BandsiteError> {
        self.repo.liked_event_ids(user_id).await
    }

    /// Repair counters that drifted from the join table.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn reconcile_counts(&self) -> Result<u64, BandsiteError> {
        let repaired = self.repo.reconcile_counts().await?;
        if repaired > 0 {
            tracing::warn!(repaired, "like counters drifted and were recomputed");
        }
        Ok(repaired)
    }
}
