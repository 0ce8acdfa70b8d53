//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod likes;
#[allow(clippy::missing_errors_doc)]
pub mod me;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use bandsite_app::ports::{EventRepository, LikeRepository, UserRepository};
use bandsite_domain::error::ValidationError;
use bandsite_domain::id::EventId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<ER, UR, LR>() -> Router<AppState<ER, UR, LR>>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    Router::new()
        // Events
        .route(
            "/events",
            get(events::list::<ER, UR, LR>).post(events::create::<ER, UR, LR>),
        )
        .route(
            "/events/{id}",
            get(events::get::<ER, UR, LR>).delete(events::delete::<ER, UR, LR>),
        )
        // Likes
        .route(
            "/events/{id}/like",
            get(likes::get::<ER, UR, LR>).post(likes::toggle::<ER, UR, LR>),
        )
        // Caller profile
        .route(
            "/me",
            get(me::get::<ER, UR, LR>).put(me::upsert::<ER, UR, LR>),
        )
        .route("/me/likes", get(me::likes::<ER, UR, LR>))
}

/// Parse an event id path segment.
pub(crate) fn parse_event_id(raw: &str) -> Result<EventId, ApiError> {
    EventId::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}
