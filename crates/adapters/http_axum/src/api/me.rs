//! JSON handlers for the caller's own profile.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bandsite_app::ports::{EventRepository, LikeRepository, UserRepository};
use bandsite_domain::id::EventId;
use bandsite_domain::user::User;

use crate::error::ApiError;
use crate::principal::Principal;
use crate::state::AppState;

/// Profile details sent by the client after login.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Possible responses from the profile endpoint.
pub enum ProfileResponse {
    Ok(Json<User>),
}

impl IntoResponse for ProfileResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the liked-events endpoint.
pub enum LikedEventsResponse {
    Ok(Json<Vec<EventId>>),
}

impl IntoResponse for LikedEventsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/me` — the caller's stored profile.
pub async fn get<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
) -> Result<ProfileResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let principal = Principal::from_headers(&headers)?;
    let user = state.user_service.get_user(&principal.user_id).await?;
    Ok(ProfileResponse::Ok(Json(user)))
}

/// `PUT /api/me` — record a login, creating or refreshing the user.
pub async fn upsert<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<ProfileResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let principal = Principal::from_headers(&headers)?;
    let user = User {
        id: principal.user_id,
        name: req.name,
        email: req.email,
        role: principal.role,
    };
    let saved = state.user_service.upsert_user(user).await?;
    Ok(ProfileResponse::Ok(Json(saved)))
}

/// `GET /api/me/likes` — ids of every event the caller likes.
///
/// Clients seed their local like state from this instead of assuming
/// nothing is liked.
pub async fn likes<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
) -> Result<LikedEventsResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let principal = Principal::from_headers(&headers)?;
    let ids = state.like_service.liked_events(&principal.user_id).await?;
    Ok(LikedEventsResponse::Ok(Json(ids)))
}
