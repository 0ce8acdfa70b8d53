//! JSON handlers for the like toggle.
//!
//! Both endpoints answer with `{"liked": bool}`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};

use bandsite_app::ports::{EventRepository, LikeRepository, UserRepository};
use bandsite_domain::error::{BandsiteError, NotFoundError};
use bandsite_domain::like::{LikeState, LikeToggle};

use crate::api::parse_event_id;
use crate::error::ApiError;
use crate::principal::Principal;
use crate::state::AppState;

/// Possible responses from the like endpoints.
pub enum LikeResponse {
    Ok(Json<LikeToggle>),
}

impl IntoResponse for LikeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events/:id/like` — whether the caller likes the event.
pub async fn get<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<LikeResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let principal = Principal::from_headers(&headers)?;
    let event_id = parse_event_id(&id)?;
    let liked = state
        .like_service
        .has_liked(event_id, &principal.user_id)
        .await?;
    Ok(LikeResponse::Ok(Json(LikeState::from(liked).into())))
}

/// `POST /api/events/:id/like` — flip the caller's like.
///
/// An unknown event comes back from the service as a soft outcome; this
/// layer reports it as `404`.
pub async fn toggle<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<LikeResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let principal = Principal::from_headers(&headers)?;
    let event_id = parse_event_id(&id)?;
    let outcome = state
        .like_service
        .toggle_like_outcome(event_id, &principal.user_id)
        .await?;

    if !outcome.event_found {
        return Err(BandsiteError::from(NotFoundError {
            entity: "Event",
            id: event_id.to_string(),
        })
        .into());
    }

    Ok(LikeResponse::Ok(Json(outcome.state.into())))
}
