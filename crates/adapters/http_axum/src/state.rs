//! Shared application state for axum handlers.

use std::sync::Arc;

use bandsite_app::ports::{EventRepository, LikeRepository, UserRepository};
use bandsite_app::services::event_service::EventService;
use bandsite_app::services::like_service::LikeService;
use bandsite_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<ER, UR, LR> {
    /// Event CRUD service.
    pub event_service: Arc<EventService<ER>>,
    /// User profile service.
    pub user_service: Arc<UserService<UR>>,
    /// Like toggle service.
    pub like_service: Arc<LikeService<LR>>,
}

impl<ER, UR, LR> Clone for AppState<ER, UR, LR> {
    fn clone(&self) -> Self {
        Self {
            event_service: Arc::clone(&self.event_service),
            user_service: Arc::clone(&self.user_service),
            like_service: Arc::clone(&self.like_service),
        }
    }
}

impl<ER, UR, LR> AppState<ER, UR, LR>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        event_service: EventService<ER>,
        user_service: UserService<UR>,
        like_service: LikeService<LR>,
    ) -> Self {
        Self {
            event_service: Arc::new(event_service),
            user_service: Arc::new(user_service),
            like_service: Arc::new(like_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when a service is also needed outside the HTTP layer,
    /// e.g. the startup counter reconciliation.
    pub fn from_arcs(
        event_service: Arc<EventService<ER>>,
        user_service: Arc<UserService<UR>>,
        like_service: Arc<LikeService<LR>>,
    ) -> Self {
        Self {
            event_service,
            user_service,
            like_service,
        }
    }
}
