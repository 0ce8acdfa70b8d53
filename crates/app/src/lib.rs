//! # bandsite-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EventRepository` — create, read and delete events
//!   - `UserRepository` — upsert users on login
//!   - `LikeRepository` — the atomic like toggle and its read queries
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LikeService` — toggle a like, ask whether a user likes an event
//!   - `EventService` — manage listed events
//!   - `UserService` — record logins
//!
//! ## Dependency rule
//! Depends on `bandsite-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//! Like correctness comes from the storage transaction behind
//! `LikeRepository::toggle`; nothing in this crate takes process-local locks.

pub mod ports;
pub mod services;
