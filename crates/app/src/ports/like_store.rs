//! Like store port — the join table and the counter it drives.

use std::future::Future;

use bandsite_domain::error::BandsiteError;
use bandsite_domain::id::{EventId, UserId};
use bandsite_domain::like::ToggleOutcome;

/// Persistence for likes.
///
/// Implementations own the invariant
/// `events.likes == count(event_likes where event_id = events.id)`.
pub trait LikeRepository {
    /// Whether a like row exists for the pair. Unknown events yield `false`.
    fn has_liked(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, BandsiteError>> + Send;

    /// Flip the pair's state in one atomic unit.
    ///
    /// The existence check, the row insert/delete and the relative counter
    /// update must commit or roll back together, and two concurrent calls
    /// for the same pair must be serialised by the store. A toggle against
    /// an unknown event writes nothing and reports
    /// [`ToggleOutcome::missing_event`].
    fn toggle(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<ToggleOutcome, BandsiteError>> + Send;

    /// Every event the user currently likes.
    fn liked_event_ids(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<EventId>, BandsiteError>> + Send;

    /// Recompute every counter from the join table, returning how many
    /// events had drifted.
    fn reconcile_counts(&self) -> impl Future<Output = Result<u64, BandsiteError>> + Send;
}
