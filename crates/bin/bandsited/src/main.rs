//! # bandsited — bandsite daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` output
//! - Initialise the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bandsite_adapter_http_axum::state::AppState;
use bandsite_adapter_storage_sqlite_sqlx::{
    SqliteEventRepository, SqliteLikeRepository, SqliteUserRepository,
};
use bandsite_app::services::event_service::EventService;
use bandsite_app::services::like_service::LikeService;
use bandsite_app::services::user_service::UserService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = config
        .storage()
        .build()
        .await
        .context("opening database")?;
    let pool = db.pool().clone();

    // Repositories
    let event_repo = SqliteEventRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool.clone());
    let like_repo = SqliteLikeRepository::new(pool);

    // Services
    let event_service = Arc::new(EventService::new(event_repo));
    let user_service = Arc::new(UserService::new(user_repo));
    let like_service = Arc::new(LikeService::new(like_repo));

    if config.database.reconcile_on_start {
        let repaired = like_service
            .reconcile_counts()
            .await
            .context("reconciling like counters")?;
        tracing::info!(repaired, "like counters reconciled");
    }

    // HTTP
    let state = AppState::from_arcs(event_service, user_service, like_service);
    let app = bandsite_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "bandsited listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bandsited stopped");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
