//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{
    PgLinkRepository, PgSessionRepository, PgUserRepository,
};
use crate::application::services::{LinkService, UserService};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repository,
        config.base_url.clone(),
        config.code_length,
    ));
    let user_service = Arc::new(UserService::new(
        user_repository,
        session_repository,
        config.token_signing_secret.clone(),
    ));

    let state = AppState {
        db: pool,
        link_service,
        user_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
