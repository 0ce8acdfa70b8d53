//! Likes — the "this user likes this event" relation.
//!
//! Each `(event, user)` pair is a two-state machine: [`LikeState::NotLiked`]
//! (initial) and [`LikeState::Liked`]. Toggling is the only transition.
//! At most one [`EventLike`] exists per pair, and an event's `likes`
//! counter always equals the number of rows referencing it.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, EventLikeId, UserId};
use crate::time::{Timestamp, now};

/// A persisted like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLike {
    pub id: EventLikeId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

impl EventLike {
    /// Record that `user_id` likes `event_id`, as of now.
    #[must_use]
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            id: EventLikeId::new(),
            event_id,
            user_id,
            created_at: now(),
        }
    }
}

/// State of a single `(event, user)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    #[default]
    NotLiked,
    Liked,
}

impl LikeState {
    /// The state after one toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::NotLiked => Self::Liked,
            Self::Liked => Self::NotLiked,
        }
    }

    #[must_use]
    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}

impl From<bool> for LikeState {
    fn from(liked: bool) -> Self {
        if liked { Self::Liked } else { Self::NotLiked }
    }
}

/// Result of a toggle as seen by callers: `{"liked": bool}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
}

impl From<LikeState> for LikeToggle {
    fn from(state: LikeState) -> Self {
        Self {
            liked: state.is_liked(),
        }
    }
}

/// What the storage layer reports after a toggle transaction.
///
/// `event_found == false` means the event does not exist: nothing was
/// written and `state` is [`LikeState::NotLiked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub state: LikeState,
    pub event_found: bool,
}

impl ToggleOutcome {
    #[must_use]
    pub fn applied(state: LikeState) -> Self {
        Self {
            state,
            event_found: true,
        }
    }

    #[must_use]
    pub fn missing_event() -> Self {
        Self {
            state: LikeState::NotLiked,
            event_found: false,
        }
    }
}
