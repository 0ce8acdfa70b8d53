//! JSON REST handlers for events.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bandsite_app::ports::{EventRepository, LikeRepository, UserRepository};
use bandsite_domain::event::Event;
use bandsite_domain::time::Timestamp;

use crate::api::parse_event_id;
use crate::error::ApiError;
use crate::principal::Principal;
use crate::state::AppState;

/// Request body for creating an event.
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub venue: Option<String>,
    pub starts_at: Option<Timestamp>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Event>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Event>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/events`
pub async fn list<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
) -> Result<ListResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let events = state.event_service.list_events().await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `GET /api/events/:id`
pub async fn get<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    let event_id = parse_event_id(&id)?;
    let event = state.event_service.get_event(event_id).await?;
    Ok(GetResponse::Ok(Json(event)))
}

/// `POST /api/events` (admin only)
pub async fn create<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
    Json(req): Json<CreateEventRequest>,
) -> Result<CreateResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    Principal::from_headers(&headers)?.require_admin("create event")?;

    let mut builder = Event::builder().title(req.title);
    if let Some(venue) = req.venue {
        builder = builder.venue(venue);
    }
    if let Some(starts_at) = req.starts_at {
        builder = builder.starts_at(starts_at);
    }

    let event = builder.build()?;
    let created = state.event_service.create_event(event).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/events/:id` (admin only)
pub async fn delete<ER, UR, LR>(
    State(state): State<AppState<ER, UR, LR>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    LR: LikeRepository + Send + Sync + 'static,
{
    Principal::from_headers(&headers)?.require_admin("delete event")?;

    let event_id = parse_event_id(&id)?;
    state.event_service.delete_event(event_id).await?;
    Ok(DeleteResponse::NoContent)
}
