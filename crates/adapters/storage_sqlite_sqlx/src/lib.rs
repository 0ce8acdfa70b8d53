//! # bandsite-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `bandsite-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Run the like toggle as a single transaction
//!
//! ## Dependency rule
//! Depends on `bandsite-app` (for port traits) and `bandsite-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod event_repo;
mod like_repo;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use event_repo::SqliteEventRepository;
pub use like_repo::SqliteLikeRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
