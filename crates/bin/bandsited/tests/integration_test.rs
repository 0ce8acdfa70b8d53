//! End-to-end smoke tests for the full bandsited stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use bandsite_adapter_http_axum::principal::{USER_ID_HEADER, USER_ROLE_HEADER};
use bandsite_adapter_http_axum::router;
use bandsite_adapter_http_axum::state::AppState;
use bandsite_adapter_storage_sqlite_sqlx::{
    Config, SqliteEventRepository, SqliteLikeRepository, SqliteUserRepository,
};
use bandsite_app::services::event_service::EventService;
use bandsite_app::services::like_service::LikeService;
use bandsite_app::services::user_service::UserService;
use bandsite_domain::id::EventId;

const ADMIN: &str = "auth0|manager";

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::new("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        EventService::new(SqliteEventRepository::new(pool.clone())),
        UserService::new(SqliteUserRepository::new(pool.clone())),
        LikeService::new(SqliteLikeRepository::new(pool)),
    );

    router::build(state)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: &str, uri: &str, user: Option<(&str, &str)>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((id, role)) = user {
        builder = builder
            .header(USER_ID_HEADER, id)
            .header(USER_ROLE_HEADER, role);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn login(app: &axum::Router, id: &str, role: &str) {
    let (status, _) = send(app, request("PUT", "/api/me", Some((id, role)), Some(json!({})))).await;
    assert_eq!(status, StatusCode::OK);
}

async fn create_event(app: &axum::Router, title: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/events",
            Some((ADMIN, "admin")),
            Some(json!({ "title": title })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn toggle(app: &axum::Router, event: &str, user: &str) -> (StatusCode, Value) {
    send(
        app,
        request(
            "POST",
            &format!("/api/events/{event}/like"),
            Some((user, "member")),
            None,
        ),
    )
    .await
}

async fn likes(app: &axum::Router, event: &str) -> u64 {
    let (status, body) = send(app, request("GET", &format!("/api/events/{event}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    body["likes"].as_u64().unwrap()
}

async fn has_liked(app: &axum::Router, event: &str, user: &str) -> bool {
    let (status, body) = send(
        app,
        request(
            "GET",
            &format!("/api/events/{event}/like"),
            Some((user, "member")),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["liked"].as_bool().unwrap()
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_follow_two_user_like_scenario() {
    let app = app().await;
    login(&app, ADMIN, "admin").await;
    login(&app, "auth0|u1", "member").await;
    login(&app, "auth0|u2", "member").await;
    let e1 = create_event(&app, "Hometown show").await;
    assert_eq!(likes(&app, &e1).await, 0);

    let (status, body) = toggle(&app, &e1, "auth0|u1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "liked": true }));
    assert_eq!(likes(&app, &e1).await, 1);

    let (_, body) = toggle(&app, &e1, "auth0|u2").await;
    assert_eq!(body, json!({ "liked": true }));
    assert_eq!(likes(&app, &e1).await, 2);

    let (_, body) = toggle(&app, &e1, "auth0|u1").await;
    assert_eq!(body, json!({ "liked": false }));
    assert_eq!(likes(&app, &e1).await, 1);

    assert!(has_liked(&app, &e1, "auth0|u2").await);
    assert!(!has_liked(&app, &e1, "auth0|u1").await);
}

#[tokio::test]
async fn should_return_not_found_when_liking_unknown_event() {
    let app = app().await;
    login(&app, "auth0|u1", "member").await;

    let (status, _) = toggle(&app, &EventId::new().to_string(), "auth0|u1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_report_false_for_unknown_event_when_querying() {
    let app = app().await;
    login(&app, "auth0|u1", "member").await;

    assert!(!has_liked(&app, &EventId::new().to_string(), "auth0|u1").await);
}

#[tokio::test]
async fn should_list_caller_likes_for_client_initialisation() {
    let app = app().await;
    login(&app, ADMIN, "admin").await;
    login(&app, "auth0|u1", "member").await;
    let e1 = create_event(&app, "Matinee").await;
    create_event(&app, "Late show").await;
    toggle(&app, &e1, "auth0|u1").await;

    let (status, body) = send(
        &app,
        request("GET", "/api/me/likes", Some(("auth0|u1", "member")), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([e1]));
}

#[tokio::test]
async fn should_drop_likes_with_deleted_event() {
    let app = app().await;
    login(&app, ADMIN, "admin").await;
    login(&app, "auth0|u1", "member").await;
    let e1 = create_event(&app, "Cancelled show").await;
    toggle(&app, &e1, "auth0|u1").await;

    let (status, _) = send(
        &app,
        request("DELETE", &format!("/api/events/{e1}"), Some((ADMIN, "admin")), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(
        &app,
        request("GET", "/api/me/likes", Some(("auth0|u1", "member")), None),
    )
    .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_forbid_members_from_deleting_events() {
    let app = app().await;
    login(&app, ADMIN, "admin").await;
    let e1 = create_event(&app, "Keep me").await;

    let (status, _) = send(
        &app,
        request("DELETE", &format!("/api/events/{e1}"), Some(("auth0|u1", "member")), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(likes(&app, &e1).await, 0);
}

#[tokio::test]
async fn should_fail_toggle_for_user_who_never_logged_in() {
    let app = app().await;
    login(&app, ADMIN, "admin").await;
    let e1 = create_event(&app, "Members only").await;

    let (status, body) = toggle(&app, &e1, "auth0|ghost").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal server error" }));
    assert_eq!(likes(&app, &e1).await, 0);
}

#[tokio::test]
async fn should_return_stored_profile_after_login() {
    let app = app().await;
    let caller = Some(("auth0|u1", "member"));
    let (status, _) = send(
        &app,
        request("PUT", "/api/me", caller, Some(json!({ "name": "Kim" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request("GET", "/api/me", caller, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Kim");
    assert_eq!(body["role"], "member");

    let (status, _) = send(
        &app,
        request("GET", "/api/me", Some(("auth0|ghost", "member")), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
