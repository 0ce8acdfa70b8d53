//! # bandsite-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for events, likes and the caller's profile
//!   (`/api/events`, `/api/events/{id}/like`, `/api/me`, …)
//! - Turn the identity headers forwarded by the login gateway into a
//!   [`principal::Principal`] and enforce the admin role on content mutations
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `bandsite-app` (for port traits and services) and `bandsite-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod principal;
pub mod router;
pub mod state;
