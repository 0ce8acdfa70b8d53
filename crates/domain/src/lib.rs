//! # bandsite-domain
//!
//! Pure domain model for the bandsite content system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Events** (gigs and shows, carrying a denormalised like counter)
//! - Define **Users** (identities forwarded by the login provider, with a role)
//! - Define **Likes** (the per-user, per-event like record and its two-state toggle)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod like;
pub mod user;
